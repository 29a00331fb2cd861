#![deny(unused_imports)]

use log::debug;

mod approx;
pub mod cmp;
mod convert;
mod fmt;
pub mod op;


pub use rational_config::Tolerance;
pub use rational_error::{RationalError, RationalErrorKind};

// `denom` is always greater than 0.
// `numer` and `denom` are coprime. If `numer` is 0, `denom` must be 1.
// Neither field is `i64::MIN`, so negating a field never overflows.
//
// Fields are private: the only way to get an instance is via the
// constructors and the operators, which all normalize.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Rational {
    numer: i64,
    denom: i64,
}

impl Rational {
    pub const ZERO: Rational = Rational { numer: 0, denom: 1 };
    pub const ONE: Rational = Rational { numer: 1, denom: 1 };
    pub const MINUS_ONE: Rational = Rational { numer: -1, denom: 1 };

    /// Reduces `numer / denom` to its lowest terms, with a positive denominator.
    ///
    /// It fails with `InvalidArgument` if `denom` is 0, and with `ArithmeticOverflow`
    /// if the reduced form needs `i64::MIN` (eg. `Rational::new(i64::MIN, 1)`).
    pub fn new(numer: i64, denom: i64) -> Result<Self, RationalError> {
        if denom == 0 {
            return Err(reject(
                RationalError::invalid_argument(),
                "new",
                format!("Rational::new({numer}, {denom})"),
            ));
        }

        Rational::from_wide(numer as i128, denom as i128).map_err(
            |e| reject(e, "new", format!("Rational::new({numer}, {denom})"))
        )
    }

    pub fn from_integer(n: i32) -> Self {
        Rational {
            numer: n as i64,
            denom: 1,
        }
    }

    pub fn zero() -> Self {
        Rational::ZERO
    }

    // Every constructor and operator ends up here.
    // `denom` must not be 0. Callers guarantee that `numer` and `denom` are
    // results of at most one multiplication and one addition of `i64`s, or of
    // a checked `i128` exponentiation.
    pub(crate) fn from_wide(numer: i128, denom: i128) -> Result<Self, RationalError> {
        debug_assert!(denom != 0);

        let (numer, denom) = if denom < 0 {
            match (numer.checked_neg(), denom.checked_neg()) {
                (Some(numer), Some(denom)) => (numer, denom),
                _ => {
                    return Err(RationalError::arithmetic_overflow());
                },
            }
        } else {
            (numer, denom)
        };

        // `g` divides `denom`, so it's in range of i128
        let g = gcd(numer.unsigned_abs(), denom.unsigned_abs()) as i128;

        match (narrow(numer / g), narrow(denom / g)) {
            (Some(numer), Some(denom)) => Ok(Rational { numer, denom }),
            _ => Err(RationalError::arithmetic_overflow()),
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numer
    }

    pub fn denominator(&self) -> i64 {
        self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    pub fn is_one(&self) -> bool {
        self.numer == 1 && self.denom == 1
    }

    pub fn is_minus_one(&self) -> bool {
        self.numer == -1 && self.denom == 1
    }

    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    pub fn is_negative(&self) -> bool {
        self.numer < 0
    }

    pub fn is_positive(&self) -> bool {
        self.numer > 0
    }

    /// -1, 0 or 1
    pub fn signum(&self) -> i64 {
        self.numer.signum()
    }

    pub fn abs(&self) -> Rational {
        Rational {
            numer: self.numer.abs(),
            denom: self.denom,
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::ZERO
    }
}

/// Euclidean algorithm. `gcd(0, n)` is `n`.
pub fn gcd(a: u128, b: u128) -> u128 {
    if b == 0 {
        a
    }

    else {
        gcd(b, a % b)
    }
}

// `i64::MIN` is out of range, because it doesn't have an opposite
fn narrow(n: i128) -> Option<i64> {
    match i64::try_from(n) {
        Ok(n) if n != i64::MIN => Some(n),
        _ => None,
    }
}

// every rejected operation is logged and the error remembers what caused it
pub(crate) fn reject(e: RationalError, func: &str, expr: String) -> RationalError {
    debug!("rational_number::{func}() failed with {}: {expr}", e.kind());

    e.with_note(expr)
}
