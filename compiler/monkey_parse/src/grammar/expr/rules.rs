//! Handler tables.
//!
//! Both tables are exhaustive matches over `TokenKind`, so adding a token
//! kind forces a decision about whether it starts or continues an
//! expression.

use monkey_ir::{Node, TokenKind};

use crate::Parser;

/// Binding power, weakest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `-x` `!x`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    Index,
}

pub(super) type PrefixFn<'a> = fn(&mut Parser<'a>) -> Option<Node>;
pub(super) type InfixFn<'a> = fn(&mut Parser<'a>, Node) -> Option<Node>;

pub(super) fn prefix_rule<'a>(kind: &TokenKind) -> Option<PrefixFn<'a>> {
    match kind {
        TokenKind::Ident(_) => Some(Parser::parse_identifier),
        TokenKind::Int(_) => Some(Parser::parse_integer_literal),
        TokenKind::Str(_) => Some(Parser::parse_string_literal),
        TokenKind::True | TokenKind::False => Some(Parser::parse_boolean),
        TokenKind::Bang | TokenKind::Minus => Some(Parser::parse_prefix_expression),
        TokenKind::LParen => Some(Parser::parse_grouped_expression),
        TokenKind::If => Some(Parser::parse_if_expression),
        TokenKind::Function => Some(Parser::parse_function_literal),
        TokenKind::LBracket => Some(Parser::parse_array_literal),
        TokenKind::LBrace => Some(Parser::parse_hash_literal),
        TokenKind::Macro => Some(Parser::parse_macro_literal),

        TokenKind::Illegal(_)
        | TokenKind::Eof
        | TokenKind::Assign
        | TokenKind::Plus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Lt
        | TokenKind::Gt
        | TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::Colon
        | TokenKind::RParen
        | TokenKind::RBrace
        | TokenKind::RBracket
        | TokenKind::Let
        | TokenKind::Else
        | TokenKind::Return => None,
    }
}

pub(super) fn infix_rule<'a>(kind: &TokenKind) -> Option<(Precedence, InfixFn<'a>)> {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => {
            Some((Precedence::Equals, Parser::parse_infix_expression))
        }
        TokenKind::Lt | TokenKind::Gt => {
            Some((Precedence::LessGreater, Parser::parse_infix_expression))
        }
        TokenKind::Plus | TokenKind::Minus => {
            Some((Precedence::Sum, Parser::parse_infix_expression))
        }
        TokenKind::Asterisk | TokenKind::Slash => {
            Some((Precedence::Product, Parser::parse_infix_expression))
        }
        TokenKind::LParen => Some((Precedence::Call, Parser::parse_call_expression)),
        TokenKind::LBracket => Some((Precedence::Index, Parser::parse_index_expression)),

        TokenKind::Illegal(_)
        | TokenKind::Eof
        | TokenKind::Ident(_)
        | TokenKind::Int(_)
        | TokenKind::Str(_)
        | TokenKind::Assign
        | TokenKind::Bang
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::Colon
        | TokenKind::RParen
        | TokenKind::LBrace
        | TokenKind::RBrace
        | TokenKind::RBracket
        | TokenKind::Function
        | TokenKind::Let
        | TokenKind::True
        | TokenKind::False
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::Return
        | TokenKind::Macro => None,
    }
}
