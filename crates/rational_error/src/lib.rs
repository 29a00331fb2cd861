#![deny(unused_imports)]

use colored::Colorize;

mod fmt;
mod kind;


pub use kind::RationalErrorKind;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RationalError {
    kind: RationalErrorKind,

    // extra information, usually the operands of the failed operation
    note: Option<String>,
}

impl RationalError {
    pub fn new(kind: RationalErrorKind) -> Self {
        RationalError {
            kind,
            note: None,
        }
    }

    pub fn invalid_argument() -> Self {
        RationalError::new(RationalErrorKind::InvalidArgument)
    }

    pub fn division_by_zero() -> Self {
        RationalError::new(RationalErrorKind::DivisionByZero)
    }

    pub fn invalid_operation() -> Self {
        RationalError::new(RationalErrorKind::InvalidOperation)
    }

    pub fn arithmetic_overflow() -> Self {
        RationalError::new(RationalErrorKind::ArithmeticOverflow)
    }

    pub fn set_note(&mut self, note: String) -> &mut Self {
        self.note = Some(note);

        self
    }

    /// Consuming version of `set_note`, for `Err(...)` expressions.
    pub fn with_note(mut self, note: String) -> Self {
        self.set_note(note);

        self
    }

    pub fn kind(&self) -> &RationalErrorKind {
        &self.kind
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn is_overflow(&self) -> bool {
        self.kind == RationalErrorKind::ArithmeticOverflow
    }

    /// It's for terminals. Use `to_string()` if you don't want colors.
    pub fn render_error(&self) -> String {
        format!(
            "{} {}{}",
            format!("[Error E{:04}]", self.kind.index()).red(),
            self.kind.render_error(),
            if let Some(note) = &self.note {
                format!("\n{} {note}", "note:".yellow())
            } else {
                String::new()
            },
        )
    }
}

impl std::error::Error for RationalError {}
