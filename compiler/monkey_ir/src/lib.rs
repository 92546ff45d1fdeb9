//! Monkey IR - shared front-end types.
//!
//! This crate contains the data structures every other stage agrees on:
//! - Spans for source locations
//! - Interned identifiers (`Name`)
//! - Tokens and `TokenList` for lexer output
//! - The AST (`Node`) with its canonical source rendering
//! - [`modify`], the whole-tree rewrite primitive used by macro expansion
//!
//! # Design Philosophy
//!
//! - **Intern identifiers**: names are `Name(u32)`, so environment lookups
//!   hash a single integer and `Name` is `Copy`.
//! - **One closed node type**: every AST variant lives in [`Node`], so the
//!   parser, evaluator and rewriter all dispatch with exhaustive matches.

pub mod ast;
mod interner;
mod modify;
mod name;
mod span;
mod token;

pub use ast::{BlockStatement, InfixOp, Node, PrefixOp, Program};
pub use interner::{InternError, StringInterner};
pub use modify::modify;
pub use name::Name;
pub use span::Span;
pub use token::{LiteralId, Token, TokenKind, TokenList};
