use std::time::Duration;

/// Numeric readouts produced by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTelemetry {
    /// Set only on ticks that close an FPS measurement window.
    pub fps: Option<u32>,
    pub elapsed_secs: f64,
    pub render_duration: Duration,
}

#[must_use]
pub fn format_elapsed(elapsed_secs: f64) -> String {
    format!("{elapsed_secs:.1}")
}

/// Display-ready telemetry. FPS holds its last value between windows.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryReadout {
    fps: Option<u32>,
    elapsed: String,
    render_duration: Duration,
}

impl Default for TelemetryReadout {
    fn default() -> Self {
        Self {
            fps: None,
            elapsed: format_elapsed(0.0),
            render_duration: Duration::ZERO,
        }
    }
}

impl TelemetryReadout {
    pub fn update(&mut self, telemetry: &FrameTelemetry) {
        if let Some(fps) = telemetry.fps {
            self.fps = Some(fps);
        }
        self.elapsed = format_elapsed(telemetry.elapsed_secs);
        self.render_duration = telemetry.render_duration;
    }

    #[must_use]
    pub fn fps(&self) -> Option<u32> {
        self.fps
    }

    #[must_use]
    pub fn elapsed(&self) -> &str {
        &self.elapsed
    }

    #[must_use]
    pub fn render_duration(&self) -> Duration {
        self.render_duration
    }
}
