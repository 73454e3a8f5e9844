/// Pointer-drag tracking between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    is_dragging: bool,
    last_pointer_x: f64,
    last_pointer_y: f64,
}

impl DragState {
    pub fn start(&mut self, x: f64, y: f64) {
        self.is_dragging = true;
        self.last_pointer_x = x;
        self.last_pointer_y = y;
    }

    /// Returns the delta since the last pointer position, or `None` when no
    /// drag is in progress.
    pub fn move_to(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !self.is_dragging {
            return None;
        }

        let delta = (x - self.last_pointer_x, y - self.last_pointer_y);
        self.last_pointer_x = x;
        self.last_pointer_y = y;

        Some(delta)
    }

    pub fn end(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }
}
