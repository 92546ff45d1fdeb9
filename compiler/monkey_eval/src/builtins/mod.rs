//! Builtin function namespace.
//!
//! Identifiers fall back to this table only when no user binding is in
//! scope, so `let len = 1; len` is `1`.

use crate::errors::EvalErrorKind;
use crate::value::Builtin;
use crate::{Object, PrintHandler};

const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "len",
        func: len,
    },
    Builtin {
        name: "first",
        func: first,
    },
    Builtin {
        name: "last",
        func: last,
    },
    Builtin {
        name: "rest",
        func: rest,
    },
    Builtin {
        name: "push",
        func: push,
    },
    Builtin {
        name: "puts",
        func: puts,
    },
];

/// Find a builtin by name.
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name).copied()
}

/// Names of every builtin, in definition order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|builtin| builtin.name)
}

fn check_arity(args: &[Object], want: usize) -> Result<(), Object> {
    if args.len() == want {
        Ok(())
    } else {
        Err(Object::error(EvalErrorKind::BuiltinArgumentCount {
            got: args.len(),
            want,
        }))
    }
}

fn array_argument<'a>(builtin: &'static str, arg: &'a Object) -> Result<&'a [Object], Object> {
    match arg {
        Object::Array(elements) => Ok(elements.as_slice()),
        other => Err(Object::error(EvalErrorKind::ExpectedArray {
            builtin,
            kind: other.kind(),
        })),
    }
}

fn length(n: usize) -> Object {
    Object::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

fn len(args: &[Object], _: &PrintHandler) -> Object {
    if let Err(error) = check_arity(args, 1) {
        return error;
    }
    match &args[0] {
        Object::Str(s) => length(s.len()),
        Object::Array(elements) => length(elements.len()),
        other => Object::error(EvalErrorKind::UnsupportedArgument {
            builtin: "len",
            kind: other.kind(),
        }),
    }
}

fn first(args: &[Object], _: &PrintHandler) -> Object {
    let elements = match check_arity(args, 1).and_then(|()| array_argument("first", &args[0])) {
        Ok(elements) => elements,
        Err(error) => return error,
    };
    elements.first().cloned().unwrap_or(Object::NULL)
}

fn last(args: &[Object], _: &PrintHandler) -> Object {
    let elements = match check_arity(args, 1).and_then(|()| array_argument("last", &args[0])) {
        Ok(elements) => elements,
        Err(error) => return error,
    };
    elements.last().cloned().unwrap_or(Object::NULL)
}

/// Everything but the first element, as a new array. `null` when empty.
fn rest(args: &[Object], _: &PrintHandler) -> Object {
    let elements = match check_arity(args, 1).and_then(|()| array_argument("rest", &args[0])) {
        Ok(elements) => elements,
        Err(error) => return error,
    };
    match elements.split_first() {
        Some((_, tail)) => Object::array(tail.to_vec()),
        None => Object::NULL,
    }
}

/// A new array with the element appended; the argument is unchanged.
fn push(args: &[Object], _: &PrintHandler) -> Object {
    let elements = match check_arity(args, 2).and_then(|()| array_argument("push", &args[0])) {
        Ok(elements) => elements,
        Err(error) => return error,
    };
    let mut pushed = Vec::with_capacity(elements.len() + 1);
    pushed.extend_from_slice(elements);
    pushed.push(args[1].clone());
    Object::array(pushed)
}

fn puts(args: &[Object], print: &PrintHandler) -> Object {
    for arg in args {
        print.println(&arg.inspect());
    }
    Object::NULL
}

#[cfg(test)]
mod tests;
