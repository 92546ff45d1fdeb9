//! Prefix and infix operator semantics.
//!
//! Dispatch order for infix operators:
//! 1. integer with integer: checked arithmetic and comparison
//! 2. string with string: concatenation and content equality
//! 3. `==` / `!=` on anything else: identity
//! 4. different kinds: type mismatch
//! 5. same kind, unsupported operator: unknown operator

use monkey_ir::{InfixOp, PrefixOp};

use crate::errors::EvalErrorKind;
use crate::Object;

pub fn eval_prefix(op: PrefixOp, right: &Object) -> Object {
    match op {
        PrefixOp::Not => Object::from_bool(!right.is_truthy()),
        PrefixOp::Neg => match right {
            Object::Integer(n) => n.checked_neg().map_or_else(
                || overflow("negation"),
                Object::Integer,
            ),
            other => Object::error(EvalErrorKind::UnknownPrefixOperator {
                op: op.as_symbol(),
                operand: other.kind(),
            }),
        },
    }
}

pub fn eval_infix(op: InfixOp, left: &Object, right: &Object) -> Object {
    match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => eval_integer_infix(op, *a, *b),
        (Object::Str(a), Object::Str(b)) => eval_string_infix(op, a, b),
        _ => match op {
            InfixOp::Eq => Object::from_bool(left.identical(right)),
            InfixOp::NotEq => Object::from_bool(!left.identical(right)),
            _ if left.kind() != right.kind() => Object::error(EvalErrorKind::TypeMismatch {
                left: left.kind(),
                op: op.as_symbol(),
                right: right.kind(),
            }),
            _ => unknown_infix(op, left, right),
        },
    }
}

fn eval_integer_infix(op: InfixOp, a: i64, b: i64) -> Object {
    let checked = |result: Option<i64>, operation: &'static str| {
        result.map_or_else(|| overflow(operation), Object::Integer)
    };
    match op {
        InfixOp::Add => checked(a.checked_add(b), "addition"),
        InfixOp::Sub => checked(a.checked_sub(b), "subtraction"),
        InfixOp::Mul => checked(a.checked_mul(b), "multiplication"),
        InfixOp::Div if b == 0 => Object::error(EvalErrorKind::DivisionByZero),
        InfixOp::Div => checked(a.checked_div(b), "division"),
        InfixOp::Lt => Object::from_bool(a < b),
        InfixOp::Gt => Object::from_bool(a > b),
        InfixOp::Eq => Object::from_bool(a == b),
        InfixOp::NotEq => Object::from_bool(a != b),
    }
}

fn eval_string_infix(op: InfixOp, a: &str, b: &str) -> Object {
    match op {
        InfixOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Object::string(joined)
        }
        InfixOp::Eq => Object::from_bool(a == b),
        InfixOp::NotEq => Object::from_bool(a != b),
        _ => Object::error(EvalErrorKind::UnknownInfixOperator {
            left: "STRING",
            op: op.as_symbol(),
            right: "STRING",
        }),
    }
}

#[cold]
fn overflow(operation: &'static str) -> Object {
    Object::error(EvalErrorKind::IntegerOverflow { operation })
}

fn unknown_infix(op: InfixOp, left: &Object, right: &Object) -> Object {
    Object::error(EvalErrorKind::UnknownInfixOperator {
        left: left.kind(),
        op: op.as_symbol(),
        right: right.kind(),
    })
}
