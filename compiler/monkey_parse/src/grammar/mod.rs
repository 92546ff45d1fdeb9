//! Grammar productions.
//!
//! Statements live here; expressions, the handler tables and binding
//! powers are in `expr`.

mod expr;

pub use expr::Precedence;

use monkey_ir::{Name, Node, TokenKind};

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Option<Node> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr>;`
    fn parse_let_statement(&mut self) -> Option<Node> {
        self.expect_peek(&TokenKind::Ident(Name::EMPTY))?;
        let TokenKind::Ident(name) = self.cursor.current_kind() else {
            return None;
        };

        self.expect_peek(&TokenKind::Assign)?;
        self.cursor.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Node::Let {
            name,
            value: Box::new(value),
        })
    }

    /// `return <expr>;`
    fn parse_return_statement(&mut self) -> Option<Node> {
        self.cursor.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Node::Return {
            value: Box::new(value),
        })
    }

    fn parse_expression_statement(&mut self) -> Option<Node> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();
        Some(Node::expr_stmt(expression))
    }
}
