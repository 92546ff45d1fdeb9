//! Infix handlers: binary operators, calls and indexing.

use monkey_ir::{InfixOp, Node, TokenKind};

use super::Precedence;
use crate::Parser;

impl Parser<'_> {
    pub(super) fn parse_infix_expression(&mut self, left: Node) -> Option<Node> {
        let op = match self.cursor.current_kind() {
            TokenKind::Plus => InfixOp::Add,
            TokenKind::Minus => InfixOp::Sub,
            TokenKind::Asterisk => InfixOp::Mul,
            TokenKind::Slash => InfixOp::Div,
            TokenKind::Eq => InfixOp::Eq,
            TokenKind::NotEq => InfixOp::NotEq,
            TokenKind::Lt => InfixOp::Lt,
            TokenKind::Gt => InfixOp::Gt,
            _ => return None,
        };
        let precedence = self.current_precedence();
        self.cursor.advance();

        let right = self.parse_expression(precedence)?;
        Some(Node::infix(op, left, right))
    }

    pub(super) fn parse_call_expression(&mut self, function: Node) -> Option<Node> {
        let arguments = self.parse_expression_list(&TokenKind::RParen)?;
        Some(Node::call(function, arguments))
    }

    pub(super) fn parse_index_expression(&mut self, left: Node) -> Option<Node> {
        self.cursor.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_closing(&TokenKind::RBracket);

        Some(Node::Index {
            left: Box::new(left),
            index: Box::new(index),
        })
    }
}
