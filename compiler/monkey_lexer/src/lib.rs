//! Monkey lexer using logos.
//!
//! Produces a `TokenList` that always ends with exactly one `Eof`. The
//! lexer never fails: input it cannot classify becomes an `Illegal` token
//! and the parser reports it.

mod escape;

use logos::Logos;
use monkey_ir::{Name, Span, Token, TokenKind, TokenList};

use crate::escape::unescape_string;

/// Raw token from logos (before conversion).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    // Keywords
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,
    #[token("macro")]
    Macro,

    // Operators
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // Delimiters
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,
}

/// Lex source code into a [`TokenList`].
pub fn lex(source: &str) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::LineComment) => {}
            Ok(raw) => {
                let kind = convert_token(raw, slice, &mut result);
                result.push(Token::new(kind, span));
            }
            Err(()) => result.push(Token::new(TokenKind::Illegal(Name::intern(slice)), span)),
        }
    }

    let eof_pos = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));

    result
}

/// Literal text goes into `list`'s literal table; identifiers are interned.
fn convert_token(raw: RawToken, slice: &str, list: &mut TokenList) -> TokenKind {
    match raw {
        RawToken::Ident => TokenKind::Ident(Name::intern(slice)),
        RawToken::Int => TokenKind::Int(list.push_literal(slice.to_owned())),
        RawToken::Str => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::Str(list.push_literal(unescape_string(content)))
        }

        RawToken::Function => TokenKind::Function,
        RawToken::Let => TokenKind::Let,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Return => TokenKind::Return,
        RawToken::Macro => TokenKind::Macro,

        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Asterisk => TokenKind::Asterisk,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,

        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,

        // Filtered out in `lex`.
        RawToken::LineComment => TokenKind::Illegal(Name::intern(slice)),
    }
}
