use crate::{Rational, RationalError, reject};

impl Rational {
    /// Truncates toward zero.
    pub fn to_i64(&self) -> i64 {
        self.numer / self.denom
    }

    /// Truncates toward zero. It fails if the truncated value doesn't fit in i32.
    pub fn to_i32(&self) -> Result<i32, RationalError> {
        let n = self.to_i64();

        i32::try_from(n).map_err(
            |_| reject(
                RationalError::arithmetic_overflow(),
                "to_i32",
                format!("{self} truncates to {n}"),
            )
        )
    }

    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    pub fn to_f32(&self) -> f32 {
        self.numer as f32 / self.denom as f32
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Rational::from_integer(n)
    }
}

impl TryFrom<i64> for Rational {
    type Error = RationalError;

    fn try_from(n: i64) -> Result<Self, RationalError> {
        Rational::new(n, 1)
    }
}

impl From<Rational> for f64 {
    fn from(r: Rational) -> f64 {
        r.to_f64()
    }
}

impl From<Rational> for f32 {
    fn from(r: Rational) -> f32 {
        r.to_f32()
    }
}
