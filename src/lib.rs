#![deny(unused_imports)]

pub use rational_config::{F32_EPSILON, F64_EPSILON, Tolerance};
pub use rational_error::{RationalError, RationalErrorKind};
pub use rational_number::{Rational, gcd};

#[cfg(test)]
mod tests;
