//! Expression parsing.
//!
//! `parse_expression` is the precedence-climbing core: run the prefix
//! handler for the current token, then keep folding infix handlers while
//! the next token binds tighter than the caller's minimum.

mod postfix;
mod primary;
mod rules;

use monkey_ir::{Node, TokenKind};
use monkey_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Parser};
pub use rules::Precedence;
use rules::{infix_rule, prefix_rule};

impl Parser<'_> {
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Node> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Option<Node> {
        let current = self.cursor.current();
        let Some(prefix) = prefix_rule(&current.kind) else {
            self.errors.push(ParseError::new(
                ParseErrorKind::MissingPrefix {
                    found: current.kind.display_name(),
                },
                current.span,
            ));
            return None;
        };
        trace!(token = ?current.kind, ?precedence, "prefix");

        let mut left = prefix(self)?;

        while !self.cursor.check_peek(&TokenKind::Semicolon) {
            let Some((next, infix)) = infix_rule(&self.cursor.peek_kind()) else {
                break;
            };
            if precedence >= next {
                break;
            }
            trace!(token = ?self.cursor.peek_kind(), ?next, "infix");
            self.cursor.advance();
            left = infix(self, left)?;
        }

        Some(left)
    }

    /// Binding power of the current token when used as an infix operator.
    pub(crate) fn current_precedence(&self) -> Precedence {
        infix_rule(&self.cursor.current_kind()).map_or(Precedence::Lowest, |(p, _)| p)
    }

    /// Comma-separated expressions up to `end`. The opening delimiter is
    /// the current token. An empty list is accepted; a trailing comma is
    /// not. A missing `end` is reported and the elements are kept.
    pub(crate) fn parse_expression_list(&mut self, end: &TokenKind) -> Option<Vec<Node>> {
        let mut list = Vec::new();

        if self.cursor.check_peek(end) {
            self.cursor.advance();
            return Some(list);
        }

        self.cursor.advance();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.cursor.check_peek(&TokenKind::Comma) {
            self.cursor.advance();
            self.cursor.advance();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_closing(end);
        Some(list)
    }
}
