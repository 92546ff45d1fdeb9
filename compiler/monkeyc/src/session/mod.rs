//! One interpreter session: a runtime environment and a macro environment
//! that outlive individual runs.

use std::fmt;

use monkey_eval::{define_macros, Environment, Evaluator, MacroError, Object, PrintHandler};
use monkey_ir::{Node, Program};
use monkey_parse::ParseError;
use thiserror::Error;
use tracing::debug;

/// Why a run stopped before producing a value.
///
/// Runtime errors are not here: they come back as `Ok(Object::Error(..))`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{}", ParseErrorList(.0))]
    Parse(Vec<ParseError>),

    #[error(transparent)]
    Macro(#[from] MacroError),
}

/// Renders parse errors the way the REPL prints them.
struct ParseErrorList<'a>(&'a [ParseError]);

impl fmt::Display for ParseErrorList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("parser errors:")?;
        for error in self.0 {
            write!(f, "\n\t{error}")?;
        }
        Ok(())
    }
}

pub struct Session {
    evaluator: Evaluator,
    env: Environment,
    macro_env: Environment,
}

impl Session {
    /// A session whose `puts` writes to stdout.
    pub fn new() -> Self {
        Session::with_print_handler(PrintHandler::stdout())
    }

    pub fn with_print_handler(print: PrintHandler) -> Self {
        Session {
            evaluator: Evaluator::new(print),
            env: Environment::new(),
            macro_env: Environment::new(),
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Runtime bindings.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Macro definitions collected so far.
    pub fn macro_env(&self) -> &Environment {
        &self.macro_env
    }

    /// Lex and parse `source` without running it.
    pub fn parse(source: &str) -> Result<Program, SessionError> {
        let tokens = monkey_lexer::lex(source);
        let output = monkey_parse::parse(&tokens);
        if output.has_errors() {
            debug!(count = output.errors.len(), "parse failed");
            return Err(SessionError::Parse(output.errors));
        }
        Ok(output.program)
    }

    /// Run `source` through the whole pipeline.
    ///
    /// Parse errors stop the run before anything is evaluated, and so does
    /// a broken macro. Definitions from earlier runs stay visible.
    pub fn run(&self, source: &str) -> Result<Object, SessionError> {
        self.run_line(source).map(|value| value.unwrap_or(Object::NULL))
    }

    /// Like [`Session::run`], but `None` when there is nothing to show: the
    /// line ends in a `let` (or holds no statements) and produced `null`.
    /// A failing `let` still yields its error.
    pub fn run_line(&self, source: &str) -> Result<Option<Object>, SessionError> {
        let mut program = Session::parse(source)?;
        let ends_in_binding = matches!(program.statements.last(), None | Some(Node::Let { .. }));
        define_macros(&mut program, &self.macro_env);
        let expanded = self.evaluator.expand_macros(program, &self.macro_env)?;
        let value = self.evaluator.eval(&expanded, &self.env);
        if ends_in_binding && matches!(value, Object::Null) {
            return Ok(None);
        }
        Ok(Some(value))
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
