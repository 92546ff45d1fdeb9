//! CLI commands. Each one reads a source file and reports to stdout or
//! stderr; failures exit with status 1.

use std::fs;
use std::io::IsTerminal;

use monkey_eval::Object;

use crate::{render_parse_errors, Session, SessionError};

/// Read a file or exit with an error message.
pub fn read_file(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            std::process::exit(1);
        }
    }
}

/// Run a program and print its final value.
pub fn run_file(path: &str) {
    let source = read_file(path);
    let session = Session::new();
    match run_source(&session, path, &source) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(report) => {
            eprint!("{report}");
            std::process::exit(1);
        }
    }
}

/// Run `source` in `session`. On success returns the text to print for
/// the final value (empty for `null`); on failure, the report for stderr.
pub fn run_source(session: &Session, path: &str, source: &str) -> Result<String, String> {
    match session.run(source) {
        Ok(Object::Null) => Ok(String::new()),
        Ok(error @ Object::Error(_)) => Err(format!("{path}: {}\n", error.inspect())),
        Ok(value) => Ok(value.inspect()),
        Err(SessionError::Parse(errors)) => Err(render_parse_errors(
            path,
            source,
            &errors,
            std::io::stderr().is_terminal(),
        )),
        Err(SessionError::Macro(error)) => Err(format!("{path}: macro error: {error}\n")),
    }
}

/// Print the canonical rendering of a parsed file.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    match parse_source(path, &source) {
        Ok(rendered) => println!("{rendered}"),
        Err(report) => {
            eprint!("{report}");
            std::process::exit(1);
        }
    }
}

pub fn parse_source(path: &str, source: &str) -> Result<String, String> {
    match Session::parse(source) {
        Ok(program) => Ok(program.to_string()),
        Err(SessionError::Parse(errors)) => Err(render_parse_errors(
            path,
            source,
            &errors,
            std::io::stderr().is_terminal(),
        )),
        Err(error) => Err(format!("{path}: {error}\n")),
    }
}

/// Print one token per line.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    print!("{}", lex_source(&source));
}

pub fn lex_source(source: &str) -> String {
    let tokens = monkey_lexer::lex(source);
    tokens
        .iter()
        .map(|token| format!("{}\n", tokens.describe(token)))
        .collect()
}

#[cfg(test)]
mod tests;
