//! `quote` / `unquote`.
//!
//! `quote(expr)` returns its argument unevaluated, after splicing in the
//! value of every `unquote(x)` call inside it.

use monkey_ir::{modify, Node};

use super::Evaluator;
use crate::errors::EvalErrorKind;
use crate::{Environment, Object};

/// The argument of an `unquote(x)` call, if `node` is one.
fn unquote_argument(node: &Node) -> Option<&Node> {
    let name = node.callee_name()?;
    if name.as_str() != "unquote" {
        return None;
    }
    match node {
        Node::Call { arguments, .. } if arguments.len() == 1 => arguments.first(),
        _ => None,
    }
}

/// Turn an unquoted value back into syntax.
fn object_to_node(value: &Object) -> Option<Node> {
    match value {
        Object::Integer(n) => Some(Node::Int(*n)),
        Object::Boolean(b) => Some(Node::Bool(*b)),
        Object::Quote(node) => Some(Node::clone(node)),
        _ => None,
    }
}

impl Evaluator {
    pub(super) fn eval_quote(&self, arguments: &[Node], env: &Environment) -> Object {
        let [argument] = arguments else {
            return Object::error(EvalErrorKind::QuoteArity {
                got: arguments.len(),
            });
        };

        let mut failure: Option<Object> = None;
        let quoted = modify(argument.clone(), &mut |node: Node| {
            if failure.is_some() {
                return node;
            }
            let Some(inner) = unquote_argument(&node) else {
                return node;
            };

            let value = self.eval(inner, env);
            if let Some(replacement) = object_to_node(&value) {
                return replacement;
            }
            failure = Some(if value.is_error() {
                value
            } else {
                Object::error(EvalErrorKind::UnquoteUnsupported { kind: value.kind() })
            });
            node
        });

        failure.unwrap_or_else(|| Object::quote(quoted))
    }
}
