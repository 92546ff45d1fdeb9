//! Token types for the Monkey lexer.

use std::fmt;
use std::mem;

use crate::{Name, Span};

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a dummy token for testing/generated code.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Index into the literal table of the [`TokenList`] that produced a token.
///
/// Literal text lives with the token list and is freed with it; only
/// identifiers go through the global interner.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LiteralId(u32);

impl LiteralId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Token kinds for Monkey.
///
/// Integer and string literals refer to their text through a [`LiteralId`].
/// Integer text is converted by the parser so an out-of-range literal
/// becomes a parse error rather than a lexer failure.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// A character sequence the lexer does not recognise.
    Illegal(Name),
    Eof,

    Ident(Name),
    /// Decimal digits, unconverted.
    Int(LiteralId),
    /// String literal contents with escapes already resolved.
    Str(LiteralId),

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Lt,
    Gt,
    Eq,
    NotEq,

    // Delimiters
    Comma,
    Semicolon,
    Colon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
    Macro,
}

impl TokenKind {
    /// Keyword for an identifier-shaped word, if it is reserved.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "fn" => Some(TokenKind::Function),
            "let" => Some(TokenKind::Let),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "return" => Some(TokenKind::Return),
            "macro" => Some(TokenKind::Macro),
            _ => None,
        }
    }

    /// Same variant, ignoring any payload.
    #[inline]
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    /// Name used in diagnostics such as
    /// `expected next token to be ), got IDENT instead`.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Illegal(_) => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident(_) => "IDENT",
            TokenKind::Int(_) => "INT",
            TokenKind::Str(_) => "STRING",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::Macro => "MACRO",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Illegal(text) => write!(f, "Illegal({:?})", text.as_str()),
            TokenKind::Ident(name) => write!(f, "Ident({})", name.as_str()),
            TokenKind::Int(id) => write!(f, "Int(#{})", id.0),
            TokenKind::Str(id) => write!(f, "Str(#{})", id.0),
            other => f.write_str(other.display_name()),
        }
    }
}

/// Lexer output. Always terminated by a single [`TokenKind::Eof`] when
/// produced by the lexer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
    literals: Vec<String>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList {
            tokens: Vec::new(),
            literals: Vec::new(),
        }
    }

    /// Store literal text and return its id for an `Int` or `Str` token.
    pub fn push_literal(&mut self, text: String) -> LiteralId {
        let id = LiteralId(u32::try_from(self.literals.len()).unwrap_or(u32::MAX));
        self.literals.push(text);
        id
    }

    /// Text of a literal pushed into this list. Ids from another list
    /// that fall out of range read as empty.
    pub fn literal(&self, id: LiteralId) -> &str {
        self.literals.get(id.index()).map_or("", String::as_str)
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Kinds only, for assertions that don't care about positions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Debug form of a token with literal text resolved, e.g. `Int(5) @ 8..9`.
    pub fn describe(&self, token: &Token) -> String {
        match token.kind {
            TokenKind::Int(id) => format!("Int({}) @ {}", self.literal(id), token.span),
            TokenKind::Str(id) => format!("Str({:?}) @ {}", self.literal(id), token.span),
            _ => format!("{token:?}"),
        }
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
