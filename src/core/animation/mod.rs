pub mod clock;
pub mod fps_counter;
pub mod settings;
pub mod telemetry;

pub use clock::SessionClock;
pub use fps_counter::FpsCounter;
pub use settings::{AnimationSettings, RandomizeRanges};
pub use telemetry::{FrameTelemetry, TelemetryReadout, format_elapsed};
