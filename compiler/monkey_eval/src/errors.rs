//! Runtime error values.
//!
//! Evaluation errors are ordinary values: `Object::Error` carries an
//! [`EvalError`] and the evaluator short-circuits on it. Nothing here
//! unwinds.

use thiserror::Error;

/// Structured error category. `Display` produces the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },

    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },

    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        op: &'static str,
        operand: &'static str,
    },

    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },

    #[error("not a function: {kind}")]
    NotAFunction { kind: &'static str },

    #[error("unusable as hash key: {kind}")]
    UnusableHashKey { kind: &'static str },

    #[error("index operator not supported: {kind}")]
    IndexNotSupported { kind: &'static str },

    #[error("wrong number of arguments: want={want}, got={got}")]
    WrongArgumentCount { want: usize, got: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    // Builtins
    #[error("wrong number of arguments. got={got}, want={want}")]
    BuiltinArgumentCount { got: usize, want: usize },

    #[error("argument to `{builtin}` not supported, got {kind}")]
    UnsupportedArgument {
        builtin: &'static str,
        kind: &'static str,
    },

    #[error("argument to `{builtin}` must be ARRAY, got {kind}")]
    ExpectedArray {
        builtin: &'static str,
        kind: &'static str,
    },

    // Quote / macro
    #[error("wrong number of arguments to quote: got={got}, want=1")]
    QuoteArity { got: usize },

    #[error("unquote produced an unsupported value: {kind}")]
    UnquoteUnsupported { kind: &'static str },

    #[error("macro literal outside a top-level let statement")]
    MisplacedMacro,
}

/// A runtime error carried by `Object::Error`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    /// The user-facing message.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages() {
        let cases = [
            (
                EvalErrorKind::IdentifierNotFound {
                    name: "foobar".to_owned(),
                },
                "identifier not found: foobar",
            ),
            (
                EvalErrorKind::TypeMismatch {
                    left: "INTEGER",
                    op: "+",
                    right: "BOOLEAN",
                },
                "type mismatch: INTEGER + BOOLEAN",
            ),
            (
                EvalErrorKind::UnknownPrefixOperator {
                    op: "-",
                    operand: "BOOLEAN",
                },
                "unknown operator: -BOOLEAN",
            ),
            (
                EvalErrorKind::BuiltinArgumentCount { got: 2, want: 1 },
                "wrong number of arguments. got=2, want=1",
            ),
            (
                EvalErrorKind::UnsupportedArgument {
                    builtin: "len",
                    kind: "INTEGER",
                },
                "argument to `len` not supported, got INTEGER",
            ),
            (
                EvalErrorKind::QuoteArity { got: 2 },
                "wrong number of arguments to quote: got=2, want=1",
            ),
        ];

        for (kind, expected) in cases {
            assert_eq!(EvalError::new(kind).message(), expected);
        }
    }
}
