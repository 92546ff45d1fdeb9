//! Monkey evaluator.
//!
//! - [`Object`]: runtime values, with `Error` as an ordinary value
//! - [`Environment`]: chained lexical scopes shared by closures
//! - [`Evaluator`]: the tree-walking interpreter, including `quote` /
//!   `unquote`
//! - [`define_macros`] / [`expand_macros`]: the AST rewrite that runs
//!   before evaluation
//!
//! # Error channels
//!
//! A runtime error is an `Object::Error` that short-circuits outward; the
//! caller checks the final value. A broken macro is a [`MacroError`]
//! returned as `Err`, which stops the run before evaluation.

pub mod builtins;
mod environment;
mod errors;
mod interpreter;
mod macros;
mod operators;
mod print_handler;
mod value;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::{eval, Evaluator};
pub use macros::{define_macros, expand_macros, MacroError};
pub use print_handler::PrintHandler;
pub use value::{
    Builtin, BuiltinFn, Function, HashKey, HashKind, HashObject, HashPair, Heap, Macro, Object,
};
