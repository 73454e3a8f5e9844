use winit::window::Window;

use crate::input::gui::{app::ports::presenter::GuiPresenterPort, errors::GuiError};

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window) -> Result<T, GuiError>;
}
