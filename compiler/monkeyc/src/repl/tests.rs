use super::*;
use monkey_eval::PrintHandler;
use pretty_assertions::assert_eq;

fn transcript(input: &str) -> (String, String) {
    let session = Session::with_print_handler(PrintHandler::buffer());
    let mut output = Vec::new();
    run(input.as_bytes(), &mut output, &session)
        .unwrap_or_else(|e| panic!("repl failed: {e}"));
    (
        String::from_utf8_lossy(&output).into_owned(),
        session.evaluator().print_handler().output(),
    )
}

#[test]
fn test_prints_each_result() {
    let (output, _) = transcript("let x = 2;\nx * 21\n\"hi\"\n");
    assert_eq!(output, ">> >> 42\n>> hi\n>> ");
}

#[test]
fn test_state_carries_across_lines() {
    let (output, _) = transcript(
        "let double = macro(x) { quote(unquote(x) * 2) };\nlet f = fn(n) { double(n) };\nf(4)\n",
    );
    assert_eq!(output, ">> >> >> 8\n>> ");
}

#[test]
fn test_parse_errors_are_tab_indented() {
    let (output, _) = transcript("let = 1\n");
    assert_eq!(
        output,
        ">> Woops! We ran into some monkey business here!\n \
         parser errors:\n\
         \texpected next token to be IDENT, got = instead\n\
         \tno prefix parse function for = found\n\
         >> "
    );
}

#[test]
fn test_quit_stops_reading() {
    let (output, _) = transcript("1\n:quit\n2\n");
    assert_eq!(output, ">> 1\n>> ");
    let (output, _) = transcript(":q\n");
    assert_eq!(output, ">> ");
}

#[test]
fn test_help_and_blank_lines() {
    let (output, _) = transcript("\n:help\n");
    assert_eq!(output, format!(">> >> {HELP}\n>> "));
}

#[test]
fn test_runtime_errors_and_macro_errors() {
    let (output, _) = transcript("foobar\nlet m = macro() { 1 }; m()\n");
    assert_eq!(
        output,
        ">> ERROR: identifier not found: foobar\n\
         >> macro error: macro `m` must return a quoted AST, got 1\n\
         >> "
    );
}

#[test]
fn test_puts_output_goes_to_print_handler() {
    let (output, printed) = transcript("puts(\"a\", [1, \"b\"])\n");
    assert_eq!(output, ">> null\n>> ");
    assert_eq!(printed, "a\n[1, \"b\"]\n");
}

#[test]
fn test_let_lines_print_nothing_but_errors_still_show() {
    let (output, _) = transcript("let a = 1;\nlet b = a + true;\nlet c = 2; c\nputs(a)\n");
    assert_eq!(
        output,
        ">> >> ERROR: type mismatch: INTEGER + BOOLEAN\n>> 2\n>> null\n>> "
    );
}
