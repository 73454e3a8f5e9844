use std::ops::RangeInclusive;

use egui::Context as EguiContext;

use crate::controllers::animation::{AnimationController, InputCommand};
use crate::core::animation::TelemetryReadout;

pub const SPEED_RANGE: RangeInclusive<f64> = 0.0..=3.0;
pub const ZOOM_RANGE: RangeInclusive<f64> = 0.1..=3.0;
pub const ITERATIONS_RANGE: RangeInclusive<u32> = 10..=500;

/// What the sliders show. Edited in place by egui, then compared against
/// the values it started from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelValues {
    pub speed: f64,
    pub zoom: f64,
    pub max_iterations: u32,
}

impl PanelValues {
    pub fn from_controller(controller: &AnimationController) -> Self {
        let view = controller.view();

        Self {
            speed: view.speed(),
            zoom: controller.zoom_slider_value(),
            max_iterations: view.max_iterations(),
        }
    }

    /// One command per slider the user moved.
    pub fn changes_since(&self, before: &PanelValues) -> Vec<InputCommand> {
        let mut commands = Vec::new();

        if self.speed != before.speed {
            commands.push(InputCommand::SetSpeed(self.speed));
        }
        if self.zoom != before.zoom {
            commands.push(InputCommand::SetZoom(self.zoom));
        }
        if self.max_iterations != before.max_iterations {
            commands.push(InputCommand::SetMaxIterations(i64::from(self.max_iterations)));
        }

        commands
    }
}

/// FPS, elapsed time and last render time, one label each.
pub fn readout_lines(readout: &TelemetryReadout) -> [String; 3] {
    let fps = match readout.fps() {
        Some(fps) => format!("FPS: {fps}"),
        None => String::from("FPS: -"),
    };

    [
        fps,
        format!("Time: {}s", readout.elapsed()),
        format!(
            "Render: {:.1} ms",
            readout.render_duration().as_secs_f64() * 1000.0
        ),
    ]
}

pub fn show_control_panel(
    ctx: &EguiContext,
    controller: &AnimationController,
    readout: &TelemetryReadout,
) -> Vec<InputCommand> {
    let before = PanelValues::from_controller(controller);
    let mut values = before;
    let mut buttons = Vec::new();

    egui::Window::new("Controls")
        .default_pos([10.0, 10.0])
        .default_size([240.0, 200.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.add(egui::Slider::new(&mut values.speed, SPEED_RANGE).text("Speed"));
            ui.add(egui::Slider::new(&mut values.zoom, ZOOM_RANGE).text("Zoom"));
            ui.add(
                egui::Slider::new(&mut values.max_iterations, ITERATIONS_RANGE)
                    .text("Iterations"),
            );

            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    buttons.push(InputCommand::Reset);
                }
                if ui.button("Randomize").clicked() {
                    buttons.push(InputCommand::Randomize);
                }
            });

            ui.separator();
            for line in readout_lines(readout) {
                ui.label(line);
            }
        });

    let mut commands = values.changes_since(&before);
    commands.extend(buttons);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::animation::FrameTelemetry;
    use std::time::{Duration, Instant};

    fn values() -> PanelValues {
        PanelValues {
            speed: 1.0,
            zoom: 1.0,
            max_iterations: 100,
        }
    }

    #[test]
    fn untouched_panel_emits_nothing() {
        assert!(values().changes_since(&values()).is_empty());
    }

    #[test]
    fn each_moved_slider_emits_its_command() {
        let after = PanelValues {
            speed: 2.5,
            zoom: 0.4,
            max_iterations: 250,
        };

        assert_eq!(
            after.changes_since(&values()),
            vec![
                InputCommand::SetSpeed(2.5),
                InputCommand::SetZoom(0.4),
                InputCommand::SetMaxIterations(250),
            ]
        );
    }

    #[test]
    fn zoom_slider_shows_capped_zoom() {
        let mut controller = AnimationController::new(800, 600, Instant::now());
        controller.apply(InputCommand::SetZoom(8.0), Instant::now());

        let panel = PanelValues::from_controller(&controller);

        assert_eq!(panel.zoom, 3.0);
        assert_eq!(controller.view().zoom(), 8.0);
    }

    #[test]
    fn readout_lines_show_fps_time_and_render_duration() {
        let mut readout = TelemetryReadout::default();
        assert_eq!(readout_lines(&readout)[0], "FPS: -");

        readout.update(&FrameTelemetry {
            fps: Some(61),
            elapsed_secs: 4.2,
            render_duration: Duration::from_micros(3_300),
        });

        assert_eq!(
            readout_lines(&readout),
            [
                String::from("FPS: 61"),
                String::from("Time: 4.2s"),
                String::from("Render: 3.3 ms"),
            ]
        );
    }
}
