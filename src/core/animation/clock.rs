use std::time::Instant;

/// Wall-clock origin for the elapsed-time readout.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    start: Instant,
}

impl SessionClock {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self { start: now }
    }

    pub fn restart(&mut self, now: Instant) {
        self.start = now;
    }

    /// Seconds since the origin, rounded to one decimal place.
    #[must_use]
    pub fn elapsed_secs(&self, now: Instant) -> f64 {
        let secs = now.saturating_duration_since(self.start).as_secs_f64();
        (secs * 10.0).round() / 10.0
    }
}
