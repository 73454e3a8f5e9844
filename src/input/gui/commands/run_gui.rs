use std::marker::PhantomData;
use std::time::Instant;

use log::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::animation::AnimationController;
use crate::input::gui::{
    app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort},
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
    errors::GuiError,
    settings::WindowSettings,
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    settings: WindowSettings,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, settings: WindowSettings) -> Self {
        Self {
            presenter_factory,
            settings,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.settings.title.as_str())
                .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height))
                .with_min_inner_size(LogicalSize::new(
                    self.settings.min_width,
                    self.settings.min_height,
                ))
                .build(&event_loop)?,
        ));

        let size = window.inner_size();
        info!("starting animation on a {}x{} surface", size.width, size.height);

        let presenter: P = self.presenter_factory.build(window)?;
        let controller = AnimationController::new(size.width, size.height, Instant::now());
        let app = GuiApp::new(window, &event_loop, presenter, controller);

        app.run(event_loop)
    }
}
