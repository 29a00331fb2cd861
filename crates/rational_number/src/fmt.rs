use super::Rational;
use std::fmt;

// `denom` is always positive, so the sign is always rendered in front of the numerator
impl fmt::Display for Rational {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        if self.denom == 1 {
            write!(fmt, "{}", self.numer)
        }

        else {
            write!(fmt, "{}/{}", self.numer, self.denom)
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "Rational({}/{})", self.numer, self.denom)
    }
}
