//! Monkey parser.
//!
//! A precedence-climbing (Pratt) parser over the lexer's `TokenList`.
//! Every token kind maps to at most one prefix handler and at most one
//! infix handler with a binding power; see `grammar/expr/rules.rs`.
//!
//! The parser never stops at the first error. A statement that fails to
//! parse records a [`ParseError`] and is left out of the program, and
//! parsing resumes at the next token so several errors surface at once.
//! A missing closing delimiter is reported without discarding the
//! construct it would have closed, so the statement and the rest of the
//! line survive.

mod cursor;
mod error;
mod grammar;

use cursor::Cursor;
use monkey_ir::{Program, TokenKind, TokenList};

pub use error::{ParseError, ParseErrorKind};
pub use grammar::Precedence;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
        }
    }

    /// Parse every statement up to `Eof`.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();

        while !self.cursor.is_at_end() {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.cursor.advance();
        }

        ParseOutput {
            program: Program::new(statements),
            errors: self.errors,
        }
    }

    /// Advance if the next token has the expected kind, else record an error.
    fn expect_peek(&mut self, expected: &TokenKind) -> Option<()> {
        if self.cursor.check_peek(expected) {
            self.cursor.advance();
            Some(())
        } else {
            let peek = self.cursor.peek();
            self.errors
                .push(ParseError::unexpected(expected, &peek.kind, peek.span));
            None
        }
    }

    /// Consume a closing delimiter. When it is missing the error is
    /// recorded and the cursor stays put, leaving the caller free to keep
    /// what it has parsed so far.
    fn expect_closing(&mut self, expected: &TokenKind) {
        if self.cursor.check_peek(expected) {
            self.cursor.advance();
        } else {
            let peek = self.cursor.peek();
            self.errors
                .push(ParseError::unexpected(expected, &peek.kind, peek.span));
        }
    }

    /// Consume an optional `;` after a statement.
    fn skip_semicolon(&mut self) {
        if self.cursor.check_peek(&TokenKind::Semicolon) {
            self.cursor.advance();
        }
    }
}

/// Parse output: the program plus every error found on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse a token list into a program.
pub fn parse(tokens: &TokenList) -> ParseOutput {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests;
