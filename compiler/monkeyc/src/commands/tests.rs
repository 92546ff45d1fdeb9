use super::*;
use monkey_eval::PrintHandler;
use pretty_assertions::assert_eq;

fn session() -> Session {
    Session::with_print_handler(PrintHandler::buffer())
}

#[test]
fn test_run_source_prints_final_value() {
    assert_eq!(
        run_source(&session(), "a.mk", "let x = [1, 2]; push(x, 3)"),
        Ok("[1, 2, 3]".to_owned())
    );
}

#[test]
fn test_run_source_null_prints_nothing() {
    let session = session();
    assert_eq!(
        run_source(&session, "a.mk", "puts(1)"),
        Ok(String::new())
    );
    assert_eq!(session.evaluator().print_handler().output(), "1\n");
}

#[test]
fn test_run_source_runtime_error_fails() {
    assert_eq!(
        run_source(&session(), "a.mk", "-true"),
        Err("a.mk: ERROR: unknown operator: -BOOLEAN\n".to_owned())
    );
}

#[test]
fn test_run_source_macro_error_fails() {
    assert_eq!(
        run_source(&session(), "a.mk", "let m = macro(a) { quote(a) }; m()"),
        Err("a.mk: macro error: macro `m` expects 1 arguments, got 0\n".to_owned())
    );
}

#[test]
fn test_run_source_parse_error_fails_with_report() {
    let result = run_source(&session(), "a.mk", "let 5;");
    let Err(report) = result else {
        panic!("expected a report, got {result:?}");
    };
    assert!(report.contains("expected next token to be IDENT, got INT instead"));
}

#[test]
fn test_parse_source_renders_canonically() {
    assert_eq!(
        parse_source("a.mk", "let x = 1 + 2 * 3; x"),
        Ok("let x = (1 + (2 * 3)); x".to_owned())
    );
}

#[test]
fn test_lex_source_lists_tokens() {
    let listing = lex_source("let x = 1;");
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("LET @ "));
    assert!(lines[1].starts_with("Ident(x) @ "));
    assert!(lines[5].starts_with("EOF @ "));
    assert_eq!(lines[3], "Int(1) @ 8..9");
    assert_eq!(lex_source(r#""a b""#).lines().next(), Some(r#"Str("a b") @ 0..5"#));
}
