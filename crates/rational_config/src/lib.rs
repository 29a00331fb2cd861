#![deny(unused_imports)]

// 2^-40 and 2^-20
// they're thresholds for approximate equality between a rational number and a float
pub const F64_EPSILON: f64 = 1.0 / (1u64 << 40) as f64;
pub const F32_EPSILON: f32 = 1.0 / (1u32 << 20) as f32;

/// Thresholds used when a rational number is compared with a floating point number.
/// Rational-to-rational comparisons never look at these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub f64_epsilon: f64,
    pub f32_epsilon: f32,
}

impl Tolerance {
    pub fn new(f64_epsilon: f64, f32_epsilon: f32) -> Self {
        Tolerance {
            f64_epsilon,
            f32_epsilon,
        }
    }

    /// With this tolerance, a float equals a rational number only if it's the exact float conversion of the number.
    pub fn exact() -> Self {
        Tolerance {
            f64_epsilon: 0.0,
            f32_epsilon: 0.0,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.f64_epsilon == 0.0 && self.f32_epsilon == 0.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            f64_epsilon: F64_EPSILON,
            f32_epsilon: F32_EPSILON,
        }
    }
}
