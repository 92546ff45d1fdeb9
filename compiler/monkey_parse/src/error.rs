//! Parse error types.

use std::fmt;

use monkey_ir::{Span, TokenKind};

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A required token was missing.
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
    },
    /// No expression can start with this token.
    MissingPrefix { found: &'static str },
    /// Integer literal that does not fit in an `i64`.
    InvalidInteger { literal: String },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedToken { expected, found } => write!(
                f,
                "expected next token to be {expected}, got {found} instead"
            ),
            ParseErrorKind::MissingPrefix { found } => {
                write!(f, "no prefix parse function for {found} found")
            }
            ParseErrorKind::InvalidInteger { literal } => {
                write!(f, "could not parse {literal:?} as integer")
            }
        }
    }
}

/// A syntax error with its location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Human-readable message.
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            message: kind.to_string(),
            kind,
            span,
        }
    }

    pub(crate) fn unexpected(expected: &TokenKind, found: &TokenKind, span: Span) -> Self {
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: expected.display_name(),
                found: found.display_name(),
            },
            span,
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError {}
