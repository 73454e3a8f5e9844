use crate::core::data::complex::Complex;

/// The Julia constant for a given animation phase.
///
/// Traces a closed loop through parameter space so the set keeps morphing
/// while the phase advances.
#[must_use]
pub fn julia_constant(time_phase: f64) -> Complex {
    Complex {
        real: -0.4 + 0.6 * (time_phase * 0.3).cos(),
        imag: 0.6 + 0.4 * (time_phase * 0.7).sin(),
    }
}
