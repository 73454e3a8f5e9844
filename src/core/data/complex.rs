use std::ops::{Add, Mul};

/// A point in the fractal plane, doubling as the iterated value `z`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    // Both parts are built from the untouched operands, so squaring in place is safe.
    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_squared_ignores_signs() {
        for (real, imag) in [(3.0, 4.0), (-3.0, 4.0), (3.0, -4.0), (-3.0, -4.0)] {
            assert_eq!(Complex::new(real, imag).magnitude_squared(), 25.0);
        }
    }

    #[test]
    fn magnitude_squared_of_origin_is_zero() {
        assert_eq!(Complex::default().magnitude_squared(), 0.0);
    }

    #[test]
    fn squaring_reads_both_parts_before_writing() {
        let z = Complex::new(1.0, 1.0);

        assert_eq!(z * z, Complex::new(0.0, 2.0));
    }

    #[test]
    fn addition_is_componentwise() {
        let sum = Complex::new(0.5, -1.0) + Complex::new(0.25, 3.0);

        assert_eq!(sum, Complex::new(0.75, 2.0));
    }
}
