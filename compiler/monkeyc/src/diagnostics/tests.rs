use super::*;
use monkey_ir::Span;
use monkey_parse::ParseErrorKind;

fn errors_for(source: &str) -> Vec<ParseError> {
    let tokens = monkey_lexer::lex(source);
    monkey_parse::parse(&tokens).errors
}

#[test]
fn test_report_contains_message_and_path() {
    let source = "let x 5;";
    let rendered = render_parse_errors("demo.mk", source, &errors_for(source), false);
    assert!(rendered.contains("expected next token to be =, got INT instead"));
    assert!(rendered.contains("demo.mk"));
    assert!(rendered.contains("let x 5;"));
}

#[test]
fn test_one_report_per_error() {
    let source = "let = 1;\nlet = 2;";
    let errors = errors_for(source);
    let rendered = render_parse_errors("demo.mk", source, &errors, false);
    assert_eq!(errors.len(), 4);
    assert!(rendered.matches("expected next token to be IDENT").count() >= 2);
    assert!(rendered.contains("no prefix parse function for = found"));
}

#[test]
fn test_span_past_end_is_clamped() {
    let error = ParseError::new(
        ParseErrorKind::MissingPrefix { found: "EOF" },
        Span::new(40, 41),
    );
    let rendered = render_parse_errors("demo.mk", "1 +", &[error], false);
    assert!(rendered.contains("no prefix parse function for EOF found"));
}

#[test]
fn test_no_errors_renders_nothing() {
    assert!(render_parse_errors("demo.mk", "1", &[], false).is_empty());
}

#[test]
fn test_clamp() {
    assert_eq!(clamp(2..3, 5), 2..3);
    assert_eq!(clamp(5..5, 5), 4..5);
    assert_eq!(clamp(9..10, 5), 4..5);
    assert_eq!(clamp(1..1, 5), 1..2);
    assert_eq!(clamp(0..0, 0), 0..0);
}
