#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RationalErrorKind {
    // a denominator of 0 is given to a constructor
    InvalidArgument,

    // reciprocal of 0, or dividing by 0
    DivisionByZero,

    // 0 raised to a negative power
    InvalidOperation,

    // the exact result does not fit in the fixed-width representation
    ArithmeticOverflow,
}

impl RationalErrorKind {
    /// Stable numeric code of each kind. Rendered messages use this.
    pub fn index(&self) -> u16 {
        match self {
            RationalErrorKind::InvalidArgument => 1,
            RationalErrorKind::DivisionByZero => 2,
            RationalErrorKind::InvalidOperation => 3,
            RationalErrorKind::ArithmeticOverflow => 4,
        }
    }

    pub fn render_error(&self) -> String {
        match self {
            RationalErrorKind::InvalidArgument => "Denominator can't be zero.",
            RationalErrorKind::DivisionByZero => "Division by zero.",
            RationalErrorKind::InvalidOperation => "Can't raise zero to a negative power.",
            RationalErrorKind::ArithmeticOverflow => "Operation causes integer overflow.",
        }.to_string()
    }
}
