use crate::{Rational, RationalError, reject};
use std::ops::Neg;

// Operands are in `[-i64::MAX, i64::MAX]` and denominators are positive, so
// `a * b + c * d` of the operands is at most `2 * (2^63 - 1)^2 < 2^127`.
// The products below never overflow i128. Only the final, reduced result
// has to be checked, and `Rational::from_wide` does that.

impl Rational {
    pub fn opposite(&self) -> Rational {
        // `numer` is never `i64::MIN`
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }

    pub fn reciprocal(&self) -> Result<Rational, RationalError> {
        if self.numer == 0 {
            return Err(reject(
                RationalError::division_by_zero(),
                "reciprocal",
                String::from("reciprocal of 0"),
            ));
        }

        // `numer` and `denom` are already coprime: only the sign has to move
        if self.numer < 0 {
            Ok(Rational {
                numer: -self.denom,
                denom: -self.numer,
            })
        }

        else {
            Ok(Rational {
                numer: self.denom,
                denom: self.numer,
            })
        }
    }

    pub fn plus(&self, other: &Rational) -> Result<Rational, RationalError> {
        let numer = self.numer as i128 * other.denom as i128 + other.numer as i128 * self.denom as i128;
        let denom = self.denom as i128 * other.denom as i128;

        Rational::from_wide(numer, denom).map_err(
            |e| reject(e, "plus", format!("{self} + {other}"))
        )
    }

    pub fn minus(&self, other: &Rational) -> Result<Rational, RationalError> {
        let numer = self.numer as i128 * other.denom as i128 - other.numer as i128 * self.denom as i128;
        let denom = self.denom as i128 * other.denom as i128;

        Rational::from_wide(numer, denom).map_err(
            |e| reject(e, "minus", format!("{self} - {other}"))
        )
    }

    pub fn times(&self, other: &Rational) -> Result<Rational, RationalError> {
        let numer = self.numer as i128 * other.numer as i128;
        let denom = self.denom as i128 * other.denom as i128;

        Rational::from_wide(numer, denom).map_err(
            |e| reject(e, "times", format!("{self} * {other}"))
        )
    }

    pub fn divided_by(&self, other: &Rational) -> Result<Rational, RationalError> {
        if other.numer == 0 {
            return Err(reject(
                RationalError::division_by_zero(),
                "divided_by",
                format!("{self} / 0"),
            ));
        }

        // same as `self.times(&other.reciprocal()?)`, without the extra rounds of normalization
        let numer = self.numer as i128 * other.denom as i128;
        let denom = self.denom as i128 * other.numer as i128;

        Rational::from_wide(numer, denom).map_err(
            |e| reject(e, "divided_by", format!("({self}) / ({other})"))
        )
    }

    /// `x^0` is 1 for every `x`, including 0.
    /// A negative `exp` raises the reciprocal to `-exp`, so 0 cannot be raised to a negative power.
    pub fn pow(&self, exp: i32) -> Result<Rational, RationalError> {
        if self.numer == 0 && exp < 0 {
            return Err(reject(
                RationalError::invalid_operation(),
                "pow",
                format!("0^({exp})"),
            ));
        }

        let base = if exp < 0 { self.reciprocal()? } else { *self };
        let exp_abs = exp.unsigned_abs();

        // coprime numbers stay coprime when raised, but `from_wide` still checks the range
        match (
            (base.numer as i128).checked_pow(exp_abs),
            (base.denom as i128).checked_pow(exp_abs),
        ) {
            (Some(numer), Some(denom)) => Rational::from_wide(numer, denom).map_err(
                |e| reject(e, "pow", format!("({self})^({exp})"))
            ),
            _ => Err(reject(
                RationalError::arithmetic_overflow(),
                "pow",
                format!("({self})^({exp})"),
            )),
        }
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        self.opposite()
    }
}
