use super::*;
use pretty_assertions::assert_eq;

fn call(name: &str, args: &[Object]) -> Object {
    let builtin = lookup(name).unwrap_or_else(|| panic!("no builtin named {name}"));
    (builtin.func)(args, &PrintHandler::Silent)
}

fn ints(values: &[i64]) -> Object {
    Object::array(values.iter().copied().map(Object::Integer).collect())
}

fn error_message(object: &Object) -> String {
    match object {
        Object::Error(error) => error.message(),
        other => panic!("expected an error, got {other:?}"),
    }
}

#[test]
fn test_len() {
    assert_eq!(call("len", &[Object::string("")]), Object::Integer(0));
    assert_eq!(call("len", &[Object::string("four")]), Object::Integer(4));
    assert_eq!(call("len", &[ints(&[1, 2, 3])]), Object::Integer(3));
    assert_eq!(
        error_message(&call("len", &[Object::Integer(1)])),
        "argument to `len` not supported, got INTEGER"
    );
    assert_eq!(
        error_message(&call("len", &[Object::string("one"), Object::string("two")])),
        "wrong number of arguments. got=2, want=1"
    );
}

#[test]
fn test_first_last_rest() {
    assert_eq!(call("first", &[ints(&[1, 2, 3])]), Object::Integer(1));
    assert_eq!(call("first", &[ints(&[])]), Object::NULL);
    assert_eq!(call("last", &[ints(&[1, 2, 3])]), Object::Integer(3));
    assert_eq!(call("last", &[ints(&[])]), Object::NULL);
    assert_eq!(call("rest", &[ints(&[1, 2, 3])]), ints(&[2, 3]));
    assert_eq!(call("rest", &[ints(&[])]), Object::NULL);
    assert_eq!(
        error_message(&call("first", &[Object::Integer(1)])),
        "argument to `first` must be ARRAY, got INTEGER"
    );
}

#[test]
fn test_push_leaves_original_untouched() {
    let original = ints(&[1]);
    let pushed = call("push", &[original.clone(), Object::Integer(2)]);
    assert_eq!(pushed, ints(&[1, 2]));
    assert_eq!(original, ints(&[1]));
    assert_eq!(
        error_message(&call("push", &[Object::Integer(1), Object::Integer(1)])),
        "argument to `push` must be ARRAY, got INTEGER"
    );
}

#[test]
fn test_puts_writes_inspect_forms() {
    let handler = PrintHandler::buffer();
    let builtin = lookup("puts").unwrap_or_else(|| panic!("puts missing"));
    let result = (builtin.func)(&[Object::string("hi"), ints(&[1, 2])], &handler);
    assert_eq!(result, Object::NULL);
    assert_eq!(handler.output(), "hi\n[1, 2]\n");
}

#[test]
fn test_names() {
    let all: Vec<&str> = names().collect();
    assert_eq!(all, vec!["len", "first", "last", "rest", "push", "puts"]);
    assert!(lookup("quote").is_none());
}
