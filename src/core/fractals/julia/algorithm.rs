use crate::core::data::complex::Complex;
use std::ops::ControlFlow;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Outcome of iterating one starting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeSample {
    pub iterations: u32,
    pub max_iterations: u32,
    /// The starting point in the fractal plane.
    pub point: Complex,
}

impl EscapeSample {
    /// True when the point never escaped within the cap ("in the set").
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.iterations >= self.max_iterations
    }
}

/// Iterates `z <- z^2 + c` from `z` and counts steps until `|z|^2 >= 4`.
///
/// Returns a count in `[0, max_iterations]`; a `max_iterations` of zero is
/// treated as one.
#[must_use]
pub fn escape_time(z: Complex, c: Complex, max_iterations: u32) -> u32 {
    let max_iterations = max_iterations.max(1);

    let iterations = (1..=max_iterations).try_fold(z, |z0, iteration| {
        if z0.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration - 1)
        } else {
            ControlFlow::Continue(z0 * z0 + c)
        }
    });

    match iterations {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}

#[must_use]
pub fn sample(point: Complex, c: Complex, max_iterations: u32) -> EscapeSample {
    let max_iterations = max_iterations.max(1);

    EscapeSample {
        iterations: escape_time(point, c, max_iterations),
        max_iterations,
        point,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: Complex = Complex::new(0.2, 0.6);

    #[test]
    fn point_outside_radius_returns_zero() {
        assert_eq!(escape_time(Complex::new(2.0, 0.0), C, 100), 0);
        assert_eq!(escape_time(Complex::new(-3.0, 1.0), C, 100), 0);
    }

    #[test]
    fn origin_with_zero_constant_never_escapes() {
        assert_eq!(escape_time(Complex::default(), Complex::default(), 50), 50);
    }

    #[test]
    fn real_and_imaginary_parts_update_from_old_values() {
        // (1 + i)^2 = 2i, which lands exactly on the escape radius after one step.
        assert_eq!(escape_time(Complex::new(1.0, 1.0), Complex::default(), 10), 1);
    }

    #[test]
    fn zero_cap_is_treated_as_one() {
        assert_eq!(escape_time(Complex::default(), Complex::default(), 0), 1);
        assert!(sample(Complex::default(), Complex::default(), 0).is_bounded());
    }

    #[test]
    fn result_stays_within_cap() {
        for step in 0..40 {
            let point = Complex::new(-2.0 + f64::from(step) * 0.1, 0.3);
            for max_iterations in [1, 2, 7, 64] {
                let iterations = escape_time(point, C, max_iterations);
                assert!(iterations <= max_iterations);
            }
        }
    }

    #[test]
    fn raising_cap_is_monotonic() {
        for step in 0..40 {
            let point = Complex::new(-1.0 + f64::from(step) * 0.05, -0.2);
            let low = escape_time(point, C, 20);
            let high = escape_time(point, C, 200);

            if low < 20 {
                assert_eq!(high, low, "escaped point changed count at {:?}", point);
            } else {
                assert!(high >= low);
            }
        }
    }

    #[test]
    fn sample_reports_bounded_points() {
        let bounded = sample(Complex::default(), Complex::default(), 30);
        let escaped = sample(Complex::new(5.0, 0.0), C, 30);

        assert!(bounded.is_bounded());
        assert_eq!(escaped.iterations, 0);
        assert!(!escaped.is_bounded());
    }
}
