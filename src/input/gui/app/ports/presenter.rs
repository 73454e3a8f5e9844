use egui::Context as EguiContext;

use crate::controllers::animation::FramePresenterPort;
use crate::core::animation::TelemetryReadout;
use crate::input::gui::errors::GuiError;

pub trait GuiPresenterPort: FramePresenterPort {
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), GuiError>;
    /// Zero sizes mean the window is minimised and nothing is drawn.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
    fn readout(&self) -> &TelemetryReadout;
}
