use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_keyword_lookup() {
    assert_eq!(TokenKind::keyword("fn"), Some(TokenKind::Function));
    assert_eq!(TokenKind::keyword("macro"), Some(TokenKind::Macro));
    assert_eq!(TokenKind::keyword("quote"), None);
    assert_eq!(TokenKind::keyword("Let"), None);
}

#[test]
fn test_same_kind_ignores_payload() {
    let a = TokenKind::Ident(Name::intern("a"));
    let b = TokenKind::Ident(Name::intern("b"));
    assert!(a.same_kind(&b));
    assert_ne!(a, b);
    let mut list = TokenList::new();
    let id = list.push_literal("1".to_owned());
    assert!(!a.same_kind(&TokenKind::Int(id)));
    assert!(TokenKind::Int(id).same_kind(&TokenKind::Int(list.push_literal("2".to_owned()))));
}

#[test]
fn test_display_names() {
    assert_eq!(TokenKind::Ident(Name::EMPTY).display_name(), "IDENT");
    assert_eq!(TokenKind::RParen.display_name(), ")");
    assert_eq!(TokenKind::NotEq.display_name(), "!=");
    assert_eq!(TokenKind::Eof.display_name(), "EOF");
}

#[test]
fn test_token_list_basics() {
    let mut list = TokenList::new();
    assert!(list.is_empty());
    list.push(Token::new(TokenKind::Let, Span::new(0, 3)));
    list.push(Token::dummy(TokenKind::Eof));
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).map(|t| t.span), Some(Span::new(0, 3)));
    assert_eq!(list.kinds(), vec![TokenKind::Let, TokenKind::Eof]);
    assert_eq!(list.iter().count(), 2);
}

#[test]
fn test_literals_live_in_the_token_list() {
    let mut list = TokenList::new();
    let five = list.push_literal("5".to_owned());
    let greeting = list.push_literal("hello world".to_owned());
    list.push(Token::new(TokenKind::Int(five), Span::new(0, 1)));
    list.push(Token::new(TokenKind::Str(greeting), Span::new(2, 15)));

    assert_eq!(list.literal(five), "5");
    assert_eq!(list.literal(greeting), "hello world");
    assert_ne!(five, greeting);

    let other = TokenList::new();
    assert_eq!(other.literal(greeting), "");
}

#[test]
fn test_describe_resolves_literal_text() {
    let mut list = TokenList::new();
    let id = list.push_literal("a\"b".to_owned());
    let token = Token::new(TokenKind::Str(id), Span::new(0, 6));
    assert_eq!(list.describe(&token), "Str(\"a\\\"b\") @ 0..6");
    assert_eq!(format!("{:?}", token.kind), "Str(#0)");

    let keyword = Token::new(TokenKind::Let, Span::new(0, 3));
    assert_eq!(list.describe(&keyword), "LET @ 0..3");
}
