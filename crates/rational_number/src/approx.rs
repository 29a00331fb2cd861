use crate::Rational;
use rational_config::Tolerance;

// These are NOT `PartialEq<f64>` impls. `==` between two `Rational`s is exact
// and must stay that way.
impl Rational {
    /// `|self - x| < 2^-40`, computed in f64.
    pub fn approx_eq_f64(&self, x: f64) -> bool {
        self.approx_eq_f64_with(x, &Tolerance::default())
    }

    /// `|self - x| < 2^-20`, computed in f32.
    pub fn approx_eq_f32(&self, x: f32) -> bool {
        self.approx_eq_f32_with(x, &Tolerance::default())
    }

    pub fn approx_eq_f64_with(&self, x: f64, tolerance: &Tolerance) -> bool {
        let difference = (self.to_f64() - x).abs();

        difference == 0.0 || difference < tolerance.f64_epsilon
    }

    pub fn approx_eq_f32_with(&self, x: f32, tolerance: &Tolerance) -> bool {
        let difference = (self.to_f32() - x).abs();

        difference == 0.0 || difference < tolerance.f32_epsilon
    }
}
