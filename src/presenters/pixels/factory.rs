use winit::window::Window;

use crate::input::gui::{
    commands::ports::presenter_factory::GuiPresenterFactoryPort, errors::GuiError,
};
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default, Clone, Copy)]
pub struct PixelsPresenterFactory;

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(&self, window: &'static Window) -> Result<PixelsPresenter, GuiError> {
        PixelsPresenter::new(window)
    }
}
