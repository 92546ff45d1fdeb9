//! Macro definition and expansion.
//!
//! Runs between parsing and evaluation:
//! 1. [`define_macros`] moves every top-level `let name = macro(...) {...}`
//!    out of the program and into a macro environment.
//! 2. [`expand_macros`] rewrites every call to a defined macro with the
//!    AST its body returns.
//!
//! Only top-level definitions are found; a macro literal nested anywhere
//! else stays in the tree and evaluates to an error.

use monkey_ir::{modify, Node, Program};
use thiserror::Error;
use tracing::debug;

use crate::{Environment, Evaluator, Object};

/// Fatal expansion failure. Unlike `Object::Error`, this aborts the run:
/// it means the macro itself is wrong, not the data it was given.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MacroError {
    #[error("macro `{name}` must return a quoted AST, got {got}")]
    NotAQuote { name: String, got: String },

    #[error("macro `{name}` expects {expected} arguments, got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
}

/// Whether `statement` is `let <name> = macro(...) {...}`.
fn is_macro_definition(statement: &Node) -> bool {
    matches!(statement, Node::Let { value, .. } if matches!(**value, Node::Macro { .. }))
}

/// Register top-level macro definitions in `env` and remove them from
/// `program`. The remaining statements keep their relative order.
pub fn define_macros(program: &mut Program, env: &Environment) {
    let definitions: Vec<usize> = program
        .statements
        .iter()
        .enumerate()
        .filter(|(_, statement)| is_macro_definition(statement))
        .map(|(index, _)| index)
        .collect();

    for &index in &definitions {
        if let Node::Let { name, value } = &program.statements[index] {
            if let Node::Macro { parameters, body } = value.as_ref() {
                debug!(name = %name, "macro defined");
                env.set(
                    *name,
                    Object::macro_def(parameters.clone(), body.clone(), env.clone()),
                );
            }
        }
    }

    // Highest index first so the lower ones stay valid.
    for &index in definitions.iter().rev() {
        program.statements.remove(index);
    }
}

/// Expand every macro call in `program` using the definitions in `env`.
///
/// Macro bodies run on a default (stdout) evaluator.
pub fn expand_macros(program: Program, env: &Environment) -> Result<Node, MacroError> {
    Evaluator::default().expand_macros(program, env)
}

impl Evaluator {
    /// Expand macro calls bottom-up. Each call's arguments are passed
    /// unevaluated as quotes; the body must produce a quote, whose node
    /// replaces the call.
    pub fn expand_macros(&self, program: Program, env: &Environment) -> Result<Node, MacroError> {
        let mut failure: Option<MacroError> = None;

        let expanded = modify(program.into_node(), &mut |node: Node| {
            if failure.is_some() {
                return node;
            }
            let Some(name) = node.callee_name() else {
                return node;
            };
            let Some(Object::Macro(definition)) = env.get(name) else {
                return node;
            };
            let Node::Call { arguments, .. } = &node else {
                return node;
            };

            if arguments.len() != definition.parameters.len() {
                failure = Some(MacroError::ArityMismatch {
                    name: name.to_string(),
                    expected: definition.parameters.len(),
                    got: arguments.len(),
                });
                return node;
            }

            let frame = Environment::new_enclosed(&definition.env);
            for (parameter, argument) in definition.parameters.iter().zip(arguments) {
                frame.set(*parameter, Object::quote(argument.clone()));
            }

            match self.eval_body(&definition.body, &frame) {
                Object::Quote(quoted) => {
                    let replacement = Node::clone(&quoted);
                    debug!(name = %name, expansion = %replacement, "macro expanded");
                    replacement
                }
                other => {
                    failure = Some(MacroError::NotAQuote {
                        name: name.to_string(),
                        got: other.inspect(),
                    });
                    node
                }
            }
        });

        match failure {
            Some(error) => Err(error),
            None => Ok(expanded),
        }
    }
}
