use std::ops::Range;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct RandomizeRanges {
    pub time_phase: Range<f64>,
    pub speed: Range<f64>,
    pub zoom: Range<f64>,
    pub max_iterations: Range<u32>,
}

impl Default for RandomizeRanges {
    fn default() -> Self {
        Self {
            time_phase: 0.0..100.0,
            speed: 0.1..3.0,
            zoom: 0.5..3.0,
            max_iterations: 50..300,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSettings {
    /// Phase advance per tick at `speed == 1`.
    pub phase_step: f64,
    pub fps_window: Duration,
    pub randomize: RandomizeRanges,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            phase_step: 0.01,
            fps_window: Duration::from_millis(1000),
            randomize: RandomizeRanges::default(),
        }
    }
}
