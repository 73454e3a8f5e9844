use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use crate::controllers::animation::InputCommand;
use crate::core::view::ZoomDirection;

/// Turns raw pointer events into animation commands.
///
/// The cursor position is tracked here because winit reports button and
/// wheel events without one.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerInputState {
    cursor_x: f64,
    cursor_y: f64,
}

impl PointerInputState {
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> InputCommand {
        self.cursor_x = x;
        self.cursor_y = y;

        InputCommand::DragMove { x, y }
    }

    /// Presses claimed by the control panel never start a drag; releases
    /// always end one.
    pub fn button(
        &self,
        button: MouseButton,
        state: ElementState,
        over_panel: bool,
    ) -> Option<InputCommand> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed if over_panel => None,
            ElementState::Pressed => Some(InputCommand::DragStart {
                x: self.cursor_x,
                y: self.cursor_y,
            }),
            ElementState::Released => Some(InputCommand::DragEnd),
        }
    }

    pub fn wheel(&self, delta: MouseScrollDelta, over_panel: bool) -> Option<InputCommand> {
        if over_panel {
            return None;
        }

        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        // Positive is a scroll up, away from the user.
        let direction = if delta_y > 0.0 {
            ZoomDirection::In
        } else if delta_y < 0.0 {
            ZoomDirection::Out
        } else {
            return None;
        };

        Some(InputCommand::Zoom {
            direction,
            pointer_x: self.cursor_x,
            pointer_y: self.cursor_y,
        })
    }
}
