use super::*;
use monkey_ir::{BlockStatement, InfixOp, Name, Node, PrefixOp};
use pretty_assertions::assert_eq;

fn parse_source(source: &str) -> ParseOutput {
    let tokens = monkey_lexer::lex(source);
    parse(&tokens)
}

/// Parse and require a clean result.
fn parse_ok(source: &str) -> Program {
    let output = parse_source(source);
    assert!(
        !output.has_errors(),
        "unexpected parse errors for {source:?}: {:?}",
        output.errors
    );
    output.program
}

/// The single expression of a one-statement program.
fn single_expression(source: &str) -> Node {
    let mut program = parse_ok(source);
    assert_eq!(program.statements.len(), 1, "{source:?}");
    match program.statements.remove(0) {
        Node::ExprStmt { expression } => *expression,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

fn error_messages(source: &str) -> Vec<String> {
    parse_source(source)
        .errors
        .into_iter()
        .map(|e| e.message)
        .collect()
}

#[test]
fn test_let_statements() {
    let program = parse_ok("let x = 5; let y = true; let foobar = y;");
    let expected = vec![("x", Node::Int(5)), ("y", Node::Bool(true)), ("foobar", Node::ident("y"))];

    assert_eq!(program.statements.len(), expected.len());
    for (statement, (name, value)) in program.statements.iter().zip(expected) {
        assert_eq!(
            statement,
            &Node::Let {
                name: Name::intern(name),
                value: Box::new(value),
            }
        );
    }
}

#[test]
fn test_return_statements() {
    let program = parse_ok("return 5; return true; return foobar;");
    assert_eq!(program.statements.len(), 3);
    assert_eq!(
        program.statements[0],
        Node::Return {
            value: Box::new(Node::Int(5))
        }
    );
    assert_eq!(program.to_string(), "return 5; return true; return foobar;");
}

#[test]
fn test_literal_expressions() {
    assert_eq!(single_expression("foobar;"), Node::ident("foobar"));
    assert_eq!(single_expression("5;"), Node::Int(5));
    assert_eq!(single_expression("true;"), Node::Bool(true));
    assert_eq!(single_expression("false"), Node::Bool(false));
    assert_eq!(
        single_expression(r#""hello world";"#),
        Node::Str("hello world".to_owned())
    );
}

#[test]
fn test_prefix_expressions() {
    assert_eq!(
        single_expression("!5;"),
        Node::prefix(PrefixOp::Not, Node::Int(5))
    );
    assert_eq!(
        single_expression("-15;"),
        Node::prefix(PrefixOp::Neg, Node::Int(15))
    );
    assert_eq!(
        single_expression("!true;"),
        Node::prefix(PrefixOp::Not, Node::Bool(true))
    );
}

#[test]
fn test_infix_expressions() {
    let cases = [
        ("5 + 5;", InfixOp::Add),
        ("5 - 5;", InfixOp::Sub),
        ("5 * 5;", InfixOp::Mul),
        ("5 / 5;", InfixOp::Div),
        ("5 > 5;", InfixOp::Gt),
        ("5 < 5;", InfixOp::Lt),
        ("5 == 5;", InfixOp::Eq),
        ("5 != 5;", InfixOp::NotEq),
    ];
    for (source, op) in cases {
        assert_eq!(
            single_expression(source),
            Node::infix(op, Node::Int(5), Node::Int(5)),
            "{source}"
        );
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4); ((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        (
            "add(a + b + c * d / f + g)",
            "add((((a + b) + ((c * d) / f)) + g))",
        ),
        (
            "a * [1, 2, 3, 4][b * c] * d",
            "((a * ([1, 2, 3, 4][(b * c)])) * d)",
        ),
        (
            "add(a * b[2], b[1], 2 * [1, 2][1])",
            "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
        ),
        ("1 + 2 * 3", "(1 + (2 * 3))"),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_ok(source).to_string(), expected, "{source}");
    }
}

#[test]
fn test_if_expression() {
    let expected = Node::If {
        condition: Box::new(Node::infix(InfixOp::Lt, Node::ident("x"), Node::ident("y"))),
        consequence: BlockStatement::new(vec![Node::expr_stmt(Node::ident("x"))]),
        alternative: None,
    };
    assert_eq!(single_expression("if (x < y) { x }"), expected);
}

#[test]
fn test_if_else_expression() {
    let expression = single_expression("if (x < y) { x } else { y }");
    let Node::If { alternative, .. } = &expression else {
        panic!("expected if, got {expression:?}");
    };
    assert_eq!(
        alternative.as_ref().map(|b| b.statements.clone()),
        Some(vec![Node::expr_stmt(Node::ident("y"))])
    );
    assert_eq!(expression.to_string(), "if ((x < y)) { x } else { y }");
}

#[test]
fn test_function_literal() {
    let expression = single_expression("fn(x, y) { x + y; }");
    assert_eq!(
        expression,
        Node::Function {
            parameters: vec![Name::intern("x"), Name::intern("y")],
            body: BlockStatement::new(vec![Node::expr_stmt(Node::infix(
                InfixOp::Add,
                Node::ident("x"),
                Node::ident("y"),
            ))]),
        }
    );
}

#[test]
fn test_function_parameters() {
    let cases: [(&str, &[&str]); 3] = [
        ("fn() {};", &[]),
        ("fn(x) {};", &["x"]),
        ("fn(x, y, z) {};", &["x", "y", "z"]),
    ];
    for (source, expected) in cases {
        let Node::Function { parameters, .. } = single_expression(source) else {
            panic!("expected function literal for {source}");
        };
        let names: Vec<&str> = parameters.iter().map(|p| p.as_str()).collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn test_call_expression() {
    let expression = single_expression("add(1, 2 * 3, 4 + 5);");
    assert_eq!(
        expression,
        Node::call(
            Node::ident("add"),
            vec![
                Node::Int(1),
                Node::infix(InfixOp::Mul, Node::Int(2), Node::Int(3)),
                Node::infix(InfixOp::Add, Node::Int(4), Node::Int(5)),
            ],
        )
    );
    assert_eq!(single_expression("f()"), Node::call(Node::ident("f"), vec![]));
}

#[test]
fn test_array_and_index_expressions() {
    assert_eq!(
        single_expression("[1, 2 * 2, 3 + 3]").to_string(),
        "[1, (2 * 2), (3 + 3)]"
    );
    assert_eq!(single_expression("[]"), Node::Array { elements: vec![] });
    assert_eq!(
        single_expression("myArray[1 + 1]"),
        Node::Index {
            left: Box::new(Node::ident("myArray")),
            index: Box::new(Node::infix(InfixOp::Add, Node::Int(1), Node::Int(1))),
        }
    );
}

#[test]
fn test_hash_literals() {
    let expression = single_expression(r#"{"one": 1, "two": 2, "three": 3}"#);
    let Node::Hash { pairs } = expression else {
        panic!("expected hash literal");
    };
    let keys: Vec<String> = pairs.iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(keys, vec![r#""one""#, r#""two""#, r#""three""#]);

    assert_eq!(single_expression("{}"), Node::Hash { pairs: vec![] });
    assert_eq!(
        single_expression(r#"{"one": 0 + 1, "two": 10 - 8}"#).to_string(),
        r#"{"one": (0 + 1), "two": (10 - 8)}"#
    );
    assert_eq!(
        single_expression("{true: 1, 2: 2,}").to_string(),
        "{true: 1, 2: 2}"
    );
}

#[test]
fn test_macro_literal() {
    let expression = single_expression("macro(x, y) { x + y; }");
    let Node::Macro { parameters, body } = &expression else {
        panic!("expected macro literal, got {expression:?}");
    };
    assert_eq!(parameters, &vec![Name::intern("x"), Name::intern("y")]);
    assert_eq!(body.to_string(), "{ (x + y) }");
}

#[test]
fn test_missing_identifier_in_let() {
    let output = parse_source("let = 10;");
    let messages: Vec<&str> = output.errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "expected next token to be IDENT, got = instead",
            "no prefix parse function for = found",
        ]
    );
    assert_eq!(output.program.to_string(), "10");
}

#[test]
fn test_multiple_errors_in_one_pass() {
    let messages = error_messages("let x 5; let = 1; let 838383;");
    assert_eq!(
        messages,
        vec![
            "expected next token to be =, got INT instead",
            "expected next token to be IDENT, got = instead",
            "no prefix parse function for = found",
            "expected next token to be IDENT, got INT instead",
        ]
    );
}

#[test]
fn test_integer_overflow_is_a_parse_error() {
    assert_eq!(
        error_messages("99999999999999999999"),
        vec![r#"could not parse "99999999999999999999" as integer"#]
    );
}

#[test]
fn test_unclosed_delimiters() {
    assert_eq!(
        error_messages("if (x) { x"),
        vec!["expected next token to be }, got EOF instead"]
    );
    assert_eq!(
        error_messages("(1 + 2"),
        vec!["expected next token to be ), got EOF instead"]
    );
}

#[test]
fn test_missing_closing_delimiter_keeps_the_statement() {
    let output = parse_source("add(1, 2; let y = 3;");
    let messages: Vec<&str> = output.errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["expected next token to be ), got ; instead"]);
    assert_eq!(output.program.statements.len(), 2);
    assert_eq!(output.program.to_string(), "add(1, 2); let y = 3;");
}

#[test]
fn test_each_closing_delimiter_recovers() {
    let cases = [
        ("[1, 2; 3", "expected next token to be ], got ; instead", "[1, 2]; 3"),
        ("(1 + 2; 3", "expected next token to be ), got ; instead", "(1 + 2); 3"),
        ("a[0; 3", "expected next token to be ], got ; instead", "(a[0]); 3"),
        (
            "if (x { 1 }; 3",
            "expected next token to be ), got { instead",
            "if (x) { 1 }; 3",
        ),
        (
            "fn(a, b { a }; 3",
            "expected next token to be ), got { instead",
            "fn(a, b) { a }; 3",
        ),
    ];
    for (source, message, rendered) in cases {
        let output = parse_source(source);
        let messages: Vec<&str> = output.errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec![message], "{source}");
        assert_eq!(output.program.to_string(), rendered, "{source}");
    }
}

#[test]
fn test_unclosed_block_keeps_its_statements() {
    let output = parse_source("let f = fn(x) { x + 1");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.program.to_string(), "let f = fn(x) { (x + 1) };");
}

#[test]
fn test_negated_min_literal() {
    assert_eq!(single_expression("-9223372036854775808"), Node::Int(i64::MIN));
    assert_eq!(
        single_expression("-9223372036854775808 + 1"),
        Node::infix(InfixOp::Add, Node::Int(i64::MIN), Node::Int(1))
    );
    assert_eq!(
        single_expression("--9223372036854775808"),
        Node::prefix(PrefixOp::Neg, Node::Int(i64::MIN))
    );
    assert_eq!(
        error_messages("9223372036854775808"),
        vec![r#"could not parse "9223372036854775808" as integer"#]
    );

    let rendered = Node::Int(i64::MIN).to_string();
    assert_eq!(rendered, "(-9223372036854775808)");
    assert_eq!(single_expression(&rendered), Node::Int(i64::MIN));
}

#[test]
fn test_trailing_separators_rejected() {
    assert_eq!(
        error_messages("fn(x,) { x }").first().map(String::as_str),
        Some("expected next token to be IDENT, got ) instead")
    );
    assert_eq!(
        error_messages("add(1,)").first().map(String::as_str),
        Some("no prefix parse function for ) found")
    );
}

#[test]
fn test_illegal_token_reports_missing_prefix() {
    let output = parse_source("1 @ 2");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].message, "no prefix parse function for ILLEGAL found");
    assert_eq!(output.errors[0].span, monkey_ir::Span::new(2, 3));
    assert_eq!(output.program.to_string(), "1; 2");
}

#[test]
fn test_error_kind_is_structured() {
    let output = parse_source("let x = ;");
    assert_eq!(
        output.errors[0].kind,
        ParseErrorKind::MissingPrefix { found: ";" }
    );
    assert_eq!(output.errors[0].to_string(), "no prefix parse function for ; found");
}

#[test]
fn test_render_reparses_to_same_tree() {
    let sources = [
        "let add = fn(a, b) { return a + b; }; add(1, 2 * 3)",
        r#"let h = {"a": [1, -2], true: if (x) { 1 } else { 2 }}; h["a"][0]"#,
        "let m = macro(x) { quote(unquote(x) + 1) }; m(2)",
        r#"puts("tab\there", "quote\"")"#,
        "fn() { }(); !!true",
    ];
    for source in sources {
        let first = parse_ok(source);
        let second = parse_ok(&first.to_string());
        assert_eq!(first, second, "{source}");
    }
}
