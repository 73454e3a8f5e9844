use crate::core::view::zoom::ZoomDirection;

/// Every way the outside world can change the animation.
///
/// Commands are applied one at a time between ticks, so a frame always sees a
/// fully updated view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputCommand {
    DragStart { x: f64, y: f64 },
    DragMove { x: f64, y: f64 },
    DragEnd,
    /// Pans by a raw device-pixel delta.
    Drag { dx: f64, dy: f64 },
    Zoom {
        direction: ZoomDirection,
        pointer_x: f64,
        pointer_y: f64,
    },
    SetSpeed(f64),
    SetZoom(f64),
    SetMaxIterations(i64),
    Reset,
    Randomize,
}
