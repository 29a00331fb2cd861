use crate::{RationalError, RationalErrorKind};
use std::fmt;

impl fmt::Display for RationalErrorKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            RationalErrorKind::InvalidArgument => "invalid argument",
            RationalErrorKind::DivisionByZero => "division by zero",
            RationalErrorKind::InvalidOperation => "invalid operation",
            RationalErrorKind::ArithmeticOverflow => "arithmetic overflow",
        };

        write!(fmt, "{s}")
    }
}

impl fmt::Display for RationalError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            fmt,
            "{}: {}{}",
            self.kind,
            self.kind.render_error(),
            match &self.note {
                Some(note) => format!(" ({note})"),
                None => String::new(),
            },
        )
    }
}
