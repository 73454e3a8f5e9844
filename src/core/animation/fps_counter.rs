use std::time::{Duration, Instant};

const MIN_WINDOW: Duration = Duration::from_millis(1);

/// Counts frames and reports a rounded rate once per measurement window.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_count: u32,
    window_start: Instant,
    window: Duration,
}

impl FpsCounter {
    #[must_use]
    pub fn new(now: Instant, window: Duration) -> Self {
        Self {
            frame_count: 0,
            window_start: now,
            window: window.max(MIN_WINDOW),
        }
    }

    /// Records one frame. Returns the rate when a full window has elapsed,
    /// then starts a new window at `now`.
    pub fn record_frame(&mut self, now: Instant) -> Option<u32> {
        self.frame_count = self.frame_count.saturating_add(1);

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < self.window {
            return None;
        }

        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        let fps = (f64::from(self.frame_count) * 1000.0 / elapsed_ms).round() as u32;

        self.frame_count = 0;
        self.window_start = now;

        Some(fps)
    }

    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }
}
