//! Prefix handlers: literals, identifiers, grouping, unary operators and
//! the keyword-introduced expressions.

use monkey_ir::{BlockStatement, Name, Node, PrefixOp, TokenKind};

use super::Precedence;
use crate::{ParseError, ParseErrorKind, Parser};

/// Digits of `i64::MIN` without the sign.
const MIN_MAGNITUDE: &str = "9223372036854775808";

impl Parser<'_> {
    pub(super) fn parse_identifier(&mut self) -> Option<Node> {
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => Some(Node::Ident(name)),
            _ => None,
        }
    }

    pub(super) fn parse_integer_literal(&mut self) -> Option<Node> {
        let TokenKind::Int(id) = self.cursor.current_kind() else {
            return None;
        };
        let text = self.cursor.literal(id);
        if let Ok(value) = text.parse::<i64>() {
            Some(Node::Int(value))
        } else {
            self.errors.push(ParseError::new(
                ParseErrorKind::InvalidInteger {
                    literal: text.to_owned(),
                },
                self.cursor.current_span(),
            ));
            None
        }
    }

    pub(super) fn parse_string_literal(&mut self) -> Option<Node> {
        match self.cursor.current_kind() {
            TokenKind::Str(id) => Some(Node::Str(self.cursor.literal(id).to_owned())),
            _ => None,
        }
    }

    pub(super) fn parse_boolean(&mut self) -> Option<Node> {
        Some(Node::Bool(self.cursor.check(&TokenKind::True)))
    }

    pub(super) fn parse_prefix_expression(&mut self) -> Option<Node> {
        let op = match self.cursor.current_kind() {
            TokenKind::Bang => PrefixOp::Not,
            TokenKind::Minus => PrefixOp::Neg,
            _ => return None,
        };
        if op == PrefixOp::Neg {
            if let Some(min) = self.negated_min_literal() {
                return Some(min);
            }
        }
        self.cursor.advance();

        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Node::prefix(op, right))
    }

    /// `-9223372036854775808` folds to `i64::MIN`; its magnitude alone does
    /// not fit an `i64`. The current token is the `-`.
    fn negated_min_literal(&mut self) -> Option<Node> {
        let TokenKind::Int(id) = self.cursor.peek_kind() else {
            return None;
        };
        if self.cursor.literal(id) != MIN_MAGNITUDE {
            return None;
        }
        self.cursor.advance();
        Some(Node::Int(i64::MIN))
    }

    pub(super) fn parse_grouped_expression(&mut self) -> Option<Node> {
        self.cursor.advance();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_closing(&TokenKind::RParen);
        Some(expression)
    }

    /// `if (<cond>) { ... } else { ... }`
    pub(super) fn parse_if_expression(&mut self) -> Option<Node> {
        self.expect_peek(&TokenKind::LParen)?;
        self.cursor.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_closing(&TokenKind::RParen);

        self.expect_peek(&TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.cursor.check_peek(&TokenKind::Else) {
            self.cursor.advance();
            self.expect_peek(&TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(Node::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    pub(super) fn parse_function_literal(&mut self) -> Option<Node> {
        let (parameters, body) = self.parse_parameters_and_body()?;
        Some(Node::Function { parameters, body })
    }

    pub(super) fn parse_macro_literal(&mut self) -> Option<Node> {
        let (parameters, body) = self.parse_parameters_and_body()?;
        Some(Node::Macro { parameters, body })
    }

    pub(super) fn parse_array_literal(&mut self) -> Option<Node> {
        let elements = self.parse_expression_list(&TokenKind::RBracket)?;
        Some(Node::Array { elements })
    }

    /// `{k: v, ...}`. Unlike argument lists, a trailing comma is allowed.
    pub(super) fn parse_hash_literal(&mut self) -> Option<Node> {
        let mut pairs = Vec::new();

        while !self.cursor.check_peek(&TokenKind::RBrace) {
            self.cursor.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(&TokenKind::Colon)?;
            self.cursor.advance();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.cursor.check_peek(&TokenKind::RBrace) {
                self.expect_peek(&TokenKind::Comma)?;
            }
        }

        self.expect_peek(&TokenKind::RBrace)?;
        Some(Node::Hash { pairs })
    }

    /// `(<params>) { <body> }` shared by `fn` and `macro`.
    fn parse_parameters_and_body(&mut self) -> Option<(Vec<Name>, BlockStatement)> {
        self.expect_peek(&TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(&TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Some((parameters, body))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Name>> {
        let mut parameters = Vec::new();

        if self.cursor.check_peek(&TokenKind::RParen) {
            self.cursor.advance();
            return Some(parameters);
        }

        parameters.push(self.expect_parameter()?);
        while self.cursor.check_peek(&TokenKind::Comma) {
            self.cursor.advance();
            parameters.push(self.expect_parameter()?);
        }

        self.expect_closing(&TokenKind::RParen);
        Some(parameters)
    }

    fn expect_parameter(&mut self) -> Option<Name> {
        self.expect_peek(&TokenKind::Ident(Name::EMPTY))?;
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Statements up to the matching `}`. The current token is the `{`.
    /// Running into `Eof` first is reported and the statements read so far
    /// are kept.
    pub(crate) fn parse_block_statement(&mut self) -> Option<BlockStatement> {
        let mut statements = Vec::new();
        self.cursor.advance();

        while !self.cursor.check(&TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                self.errors.push(ParseError::unexpected(
                    &TokenKind::RBrace,
                    &TokenKind::Eof,
                    self.cursor.current_span(),
                ));
                return Some(BlockStatement::new(statements));
            }
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.cursor.advance();
        }

        Some(BlockStatement::new(statements))
    }
}
