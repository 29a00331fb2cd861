use crate::Rational;
use std::cmp::Ordering;

// a/b vs c/d  ->  a*d vs c*b
// Both denominators are positive, so the direction doesn't flip.
// The products fit in i128.
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numer as i128 * other.denom as i128;
        let rhs = other.numer as i128 * self.denom as i128;

        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Rational {
    pub fn greater_than(&self, other: &Rational) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    pub fn less_than(&self, other: &Rational) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Compares `self` with an arbitrary real number.
    ///
    /// Precision caveat: `self` is converted to `f64` first, so two different
    /// rational numbers may compare equal against the same float. Use `cmp`
    /// when both sides are `Rational`. It returns `None` if `n` is NaN.
    pub fn cmp_real<N: Into<f64>>(&self, n: N) -> Option<Ordering> {
        self.to_f64().partial_cmp(&n.into())
    }

    /// See `cmp_real` for the precision caveat.
    pub fn greater_than_real<N: Into<f64>>(&self, n: N) -> bool {
        self.cmp_real(n) == Some(Ordering::Greater)
    }

    /// See `cmp_real` for the precision caveat.
    pub fn less_than_real<N: Into<f64>>(&self, n: N) -> bool {
        self.cmp_real(n) == Some(Ordering::Less)
    }
}
