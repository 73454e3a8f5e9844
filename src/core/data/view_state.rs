use crate::core::view::limits::ViewLimits;

pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_SPEED: f64 = 1.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// How a setter treated the value it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Exact,
    Clamped,
    Ignored,
}

/// Pan, zoom and animation parameters shared by input handling and the frame tick.
///
/// Fields are private so every mutation goes through a setter that keeps
/// `zoom > 0`, `max_iterations >= 1`, `speed >= 0` and a finite, non-negative
/// `time_phase`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
    time_phase: f64,
    speed: f64,
    max_iterations: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset_x: 0.0,
            offset_y: 0.0,
            time_phase: 0.0,
            speed: DEFAULT_SPEED,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    #[must_use]
    pub fn time_phase(&self) -> f64 {
        self.time_phase
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn set_zoom(&mut self, zoom: f64, limits: &ViewLimits) -> Adjustment {
        if !zoom.is_finite() {
            return Adjustment::Ignored;
        }

        let clamped = limits.clamp_zoom(zoom);
        self.zoom = clamped;

        if clamped == zoom {
            Adjustment::Exact
        } else {
            Adjustment::Clamped
        }
    }

    pub fn set_offset(&mut self, offset_x: f64, offset_y: f64) -> Adjustment {
        if !offset_x.is_finite() || !offset_y.is_finite() {
            return Adjustment::Ignored;
        }

        self.offset_x = offset_x;
        self.offset_y = offset_y;
        Adjustment::Exact
    }

    /// Moves the view by a raw device-pixel delta, independent of zoom.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> Adjustment {
        self.set_offset(self.offset_x + dx, self.offset_y + dy)
    }

    pub fn set_speed(&mut self, speed: f64) -> Adjustment {
        if !speed.is_finite() {
            return Adjustment::Ignored;
        }

        if speed < 0.0 {
            self.speed = 0.0;
            return Adjustment::Clamped;
        }

        self.speed = speed;
        Adjustment::Exact
    }

    /// Caps at `u32::MAX`; anything below one becomes one.
    pub fn set_max_iterations(&mut self, max_iterations: i64) -> Adjustment {
        let clamped = max_iterations.clamp(1, i64::from(u32::MAX));
        self.max_iterations = clamped as u32;

        if clamped == max_iterations {
            Adjustment::Exact
        } else {
            Adjustment::Clamped
        }
    }

    pub fn set_time_phase(&mut self, time_phase: f64) -> Adjustment {
        if !time_phase.is_finite() {
            return Adjustment::Ignored;
        }

        if time_phase < 0.0 {
            self.time_phase = 0.0;
            return Adjustment::Clamped;
        }

        self.time_phase = time_phase;
        Adjustment::Exact
    }

    /// Advances the phase by `step * speed`. Never moves the phase backwards.
    pub fn advance_phase(&mut self, step: f64) {
        let next = self.time_phase + step * self.speed;

        if next.is_finite() && next >= self.time_phase {
            self.time_phase = next;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
