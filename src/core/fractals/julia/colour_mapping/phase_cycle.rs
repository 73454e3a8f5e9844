use crate::core::data::colour::Colour;
use crate::core::fractals::julia::algorithm::EscapeSample;
use crate::core::fractals::julia::colour_mapping::map::JuliaColourMap;

const BANDS_PER_ITERATION: f64 = 8.0;
const PALETTE_SIZE: f64 = 256.0;
const PALETTE_FREQUENCY: f64 = 0.1;
const GREEN_PHASE: f64 = 2.0;
const BLUE_PHASE: f64 = 4.0;

/// Smooth escape-time gradient built from three phase-shifted sinusoids.
///
/// Hue rotates with the same `time_phase` that drives the Julia constant,
/// so colour and shape evolve together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseCycleGradient {
    time_phase: f64,
}

impl PhaseCycleGradient {
    #[must_use]
    pub fn new(time_phase: f64) -> Self {
        Self { time_phase }
    }

    #[must_use]
    pub fn time_phase(&self) -> f64 {
        self.time_phase
    }
}

impl JuliaColourMap for PhaseCycleGradient {
    fn map(&self, sample: EscapeSample) -> Colour {
        if sample.is_bounded() {
            return Colour::BLACK;
        }

        let smooth = f64::from(sample.iterations) + 1.0
            - smoothing_correction(sample.point.magnitude_squared());
        // `%` keeps the sign of the dividend, so strongly negative values stay negative.
        let colour_value = (smooth * BANDS_PER_ITERATION).floor() % PALETTE_SIZE;
        let angle = colour_value * PALETTE_FREQUENCY + self.time_phase;

        Colour {
            r: channel(angle),
            g: channel(angle + GREEN_PHASE),
            b: channel(angle + BLUE_PHASE),
        }
    }
}

/// `log2(log2(|z|^2))`, or zero where that is not a finite number.
///
/// Points with `|z|^2 <= 1` have no real double logarithm; those fall back to
/// the plain iteration colour.
fn smoothing_correction(magnitude_squared: f64) -> f64 {
    let correction = magnitude_squared.log2().log2();

    if correction.is_finite() {
        correction
    } else {
        0.0
    }
}

fn channel(angle: f64) -> u8 {
    let value = (128.0 + 127.0 * angle.sin()).floor();

    if value.is_finite() {
        value.clamp(0.0, 255.0) as u8
    } else {
        0
    }
}
