//! Token cursor for navigating the token stream.
//!
//! Two-token lookahead: the parser always looks at the current token and
//! the one after it. Positions past the end read as `Eof`.

use monkey_ir::{LiteralId, Span, Token, TokenKind, TokenList};

static EOF: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// The token after the current one.
    #[inline]
    pub fn peek(&self) -> &'a Token {
        self.tokens.get(self.pos + 1).unwrap_or(&EOF)
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Text of an `Int` or `Str` literal from the underlying token list.
    #[inline]
    pub fn literal(&self, id: LiteralId) -> &'a str {
        self.tokens.literal(id)
    }

    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    #[inline]
    pub fn check_peek(&self, kind: &TokenKind) -> bool {
        self.peek_kind().same_kind(kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Move to the next token. Stays put once `Eof` is current.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }
}
