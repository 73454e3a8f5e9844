use std::time::Instant;

use egui::Context as EguiContext;
use egui_winit::State as EguiWinitState;
use log::{error, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

use crate::controllers::animation::{AnimationController, InputCommand};
use crate::input::gui::app::control_panel::show_control_panel;
use crate::input::gui::app::pointer_input::PointerInputState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    controller: AnimationController,
    pointer: PointerInputState,
    egui_ctx: EguiContext,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: AnimationController,
    ) -> Self {
        let egui_ctx = EguiContext::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            window,
            presenter,
            controller,
            pointer: PointerInputState::default(),
            egui_ctx,
            egui_state,
        }
    }

    /// Runs until the window closes. Every pass through the loop requests
    /// another redraw, so the animation never idles.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        let window = self.window;
        let mut failure = None;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                if let Err(err) = self.handle_window_event(event) {
                    error!("{err}");
                    failure = Some(err);
                    elwt.exit();
                } else if matches!(event, WindowEvent::CloseRequested) {
                    info!("window closed");
                    elwt.exit();
                }
            }
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        })?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> Result<(), GuiError> {
        let over_panel = self.egui_state.on_window_event(self.window, event).consumed;

        match event {
            WindowEvent::RedrawRequested => self.redraw()?,
            WindowEvent::Resized(size) => self.resize(size.width, size.height)?,
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let size = self.window.inner_size();
                self.resize(size.width, size.height)?;
            }
            WindowEvent::CursorMoved { position, .. } => {
                let command = self.pointer.cursor_moved(position.x, position.y);
                self.apply(command);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(command) = self.pointer.button(*button, *state, over_panel) {
                    self.apply(command);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(command) = self.pointer.wheel(*delta, over_panel) {
                    self.apply(command);
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn apply(&mut self, command: InputCommand) {
        self.controller.apply(command, Instant::now());
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.controller.resize(width, height);
        self.presenter.resize(width, height)
    }

    fn redraw(&mut self) -> Result<(), GuiError> {
        let mut egui_output = self.update_ui();

        egui_output.platform_output.cursor_icon = if self.controller.is_dragging() {
            egui::CursorIcon::Grabbing
        } else if self.egui_ctx.is_pointer_over_area() {
            egui_output.platform_output.cursor_icon
        } else {
            egui::CursorIcon::Grab
        };
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        let report = self.controller.tick(Instant::now());
        if let Some(pixel_buffer) = &report.pixel_buffer {
            self.presenter.present(pixel_buffer);
        }
        self.presenter.publish_telemetry(&report.telemetry);

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    /// Runs the egui pass and applies whatever the panel asked for.
    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let mut commands = Vec::new();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            commands = show_control_panel(ctx, &self.controller, self.presenter.readout());
        });

        for command in commands {
            self.apply(command);
        }

        output
    }
}
