//! Tree-walking evaluator.
//!
//! `eval` is total over every node kind. Errors are values: any
//! sub-evaluation that yields an `Error` (or a `ReturnValue` on its way out
//! of a function) becomes the result of the enclosing expression without
//! evaluating anything further.

mod quote;

use monkey_ir::{BlockStatement, Name, Node, Program};
use monkey_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::errors::EvalErrorKind;
use crate::operators::{eval_infix, eval_prefix};
use crate::value::{HashObject, HashPair};
use crate::{builtins, Environment, Object, PrintHandler};

/// Evaluator state: where `puts` output goes.
#[derive(Default)]
pub struct Evaluator {
    print: PrintHandler,
}

impl Evaluator {
    pub fn new(print: PrintHandler) -> Self {
        Evaluator { print }
    }

    pub fn print_handler(&self) -> &PrintHandler {
        &self.print
    }

    /// Evaluate `node` in `env`.
    pub fn eval(&self, node: &Node, env: &Environment) -> Object {
        ensure_sufficient_stack(|| self.eval_node(node, env))
    }

    /// Evaluate a whole program. A top-level `return` ends the program with
    /// its value.
    pub fn eval_program(&self, program: &Program, env: &Environment) -> Object {
        self.eval_statements(&program.statements, env, true)
    }

    fn eval_node(&self, node: &Node, env: &Environment) -> Object {
        match node {
            Node::Program(program) => self.eval_program(program, env),
            Node::Block(block) => self.eval_block(block, env),
            Node::ExprStmt { expression } => self.eval(expression, env),
            Node::Let { name, value } => {
                let value = self.eval(value, env);
                if value.is_signal() {
                    return value;
                }
                env.set(*name, value);
                Object::NULL
            }
            Node::Return { value } => {
                let value = self.eval(value, env);
                if value.is_signal() {
                    return value;
                }
                Object::return_value(value)
            }

            Node::Int(value) => Object::Integer(*value),
            Node::Bool(value) => Object::from_bool(*value),
            Node::Str(value) => Object::string(value.as_str()),
            Node::Ident(name) => eval_identifier(*name, env),

            Node::Prefix { op, right } => {
                let right = self.eval(right, env);
                if right.is_signal() {
                    return right;
                }
                eval_prefix(*op, &right)
            }
            Node::Infix { op, left, right } => {
                let left = self.eval(left, env);
                if left.is_signal() {
                    return left;
                }
                let right = self.eval(right, env);
                if right.is_signal() {
                    return right;
                }
                eval_infix(*op, &left, &right)
            }
            Node::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval(condition, env);
                if condition.is_signal() {
                    return condition;
                }
                if condition.is_truthy() {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    Object::NULL
                }
            }

            Node::Function { parameters, body } => {
                Object::function(parameters.clone(), body.clone(), env.clone())
            }
            Node::Call {
                function,
                arguments,
            } => {
                if node.callee_name().is_some_and(|name| name.as_str() == "quote") {
                    return self.eval_quote(arguments, env);
                }
                let function = self.eval(function, env);
                if function.is_signal() {
                    return function;
                }
                match self.eval_expressions(arguments, env) {
                    Ok(args) => self.apply_function(&function, args),
                    Err(signal) => signal,
                }
            }

            Node::Array { elements } => match self.eval_expressions(elements, env) {
                Ok(elements) => Object::array(elements),
                Err(signal) => signal,
            },
            Node::Hash { pairs } => self.eval_hash_literal(pairs, env),
            Node::Index { left, index } => {
                let left = self.eval(left, env);
                if left.is_signal() {
                    return left;
                }
                let index = self.eval(index, env);
                if index.is_signal() {
                    return index;
                }
                eval_index(&left, &index)
            }

            // Macro definitions are stripped before evaluation.
            Node::Macro { .. } => Object::error(EvalErrorKind::MisplacedMacro),
        }
    }

    fn eval_block(&self, block: &BlockStatement, env: &Environment) -> Object {
        self.eval_statements(&block.statements, env, false)
    }

    /// Run statements in order, stopping at the first signal. At the top
    /// level a `ReturnValue` is unwrapped; inside a block it is passed on.
    fn eval_statements(&self, statements: &[Node], env: &Environment, top_level: bool) -> Object {
        let mut result = Object::NULL;
        for statement in statements {
            result = self.eval(statement, env);
            match result {
                Object::ReturnValue(value) if top_level => return (*value).clone(),
                Object::ReturnValue(_) | Object::Error(_) => return result,
                _ => {}
            }
        }
        result
    }

    /// Evaluate left to right; the first signal aborts the list.
    fn eval_expressions(&self, nodes: &[Node], env: &Environment) -> Result<Vec<Object>, Object> {
        let mut values = Vec::with_capacity(nodes.len());
        for node in nodes {
            let value = self.eval(node, env);
            if value.is_signal() {
                return Err(value);
            }
            values.push(value);
        }
        Ok(values)
    }

    fn eval_hash_literal(&self, pairs: &[(Node, Node)], env: &Environment) -> Object {
        let mut hash = HashObject::new();
        for (key_node, value_node) in pairs {
            let key = self.eval(key_node, env);
            if key.is_signal() {
                return key;
            }
            let Some(hash_key) = key.hash_key() else {
                return Object::error(EvalErrorKind::UnusableHashKey { kind: key.kind() });
            };
            let value = self.eval(value_node, env);
            if value.is_signal() {
                return value;
            }
            hash.insert(hash_key, HashPair { key, value });
        }
        Object::hash(hash)
    }

    /// Call a function or builtin with already-evaluated arguments.
    ///
    /// User functions get a fresh frame enclosing their captured
    /// environment, and the caller never sees a `ReturnValue`.
    pub fn apply_function(&self, function: &Object, args: Vec<Object>) -> Object {
        match function {
            Object::Function(function) => {
                if args.len() != function.parameters.len() {
                    return Object::error(EvalErrorKind::WrongArgumentCount {
                        want: function.parameters.len(),
                        got: args.len(),
                    });
                }
                debug!(arity = args.len(), "calling function");
                let frame = Environment::new_enclosed(&function.env);
                for (parameter, arg) in function.parameters.iter().zip(args) {
                    frame.set(*parameter, arg);
                }
                unwrap_return_value(self.eval_block(&function.body, &frame))
            }
            Object::Builtin(builtin) => {
                debug!(builtin = builtin.name, arity = args.len(), "calling builtin");
                (builtin.func)(&args, &self.print)
            }
            other => Object::error(EvalErrorKind::NotAFunction { kind: other.kind() }),
        }
    }

    /// Evaluate a macro or function body in `env`, unwrapping an explicit
    /// `return`.
    pub(crate) fn eval_body(&self, body: &BlockStatement, env: &Environment) -> Object {
        unwrap_return_value(self.eval_block(body, env))
    }
}

fn unwrap_return_value(result: Object) -> Object {
    match result {
        Object::ReturnValue(value) => (*value).clone(),
        other => other,
    }
}

/// User bindings first, then builtins.
fn eval_identifier(name: Name, env: &Environment) -> Object {
    if let Some(value) = env.get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name.as_str()) {
        return Object::Builtin(builtin);
    }
    Object::error(EvalErrorKind::IdentifierNotFound {
        name: name.as_str().to_owned(),
    })
}

fn eval_index(left: &Object, index: &Object) -> Object {
    match (left, index) {
        (Object::Array(elements), Object::Integer(i)) => usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(Object::NULL),
        (Object::Array(_), _) => Object::NULL,
        (Object::Hash(hash), key) => match key.hash_key() {
            Some(hash_key) => hash
                .get(&hash_key)
                .map_or(Object::NULL, |pair| pair.value.clone()),
            None => Object::error(EvalErrorKind::UnusableHashKey { kind: key.kind() }),
        },
        (other, _) => Object::error(EvalErrorKind::IndexNotSupported { kind: other.kind() }),
    }
}

/// Evaluate with a stdout-backed evaluator.
pub fn eval(node: &Node, env: &Environment) -> Object {
    Evaluator::default().eval(node, env)
}
