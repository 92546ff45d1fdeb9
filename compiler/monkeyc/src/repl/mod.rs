//! Interactive read-eval-print loop.
//!
//! One [`Session`] lives for the whole loop, so bindings and macros from
//! earlier lines stay visible.

use std::io::{self, BufRead, Write};

use crate::{Session, SessionError};

pub const PROMPT: &str = ">> ";

const HELP: &str = "\
Commands:
  :quit, :q   Exit REPL
  :help, :h   Show this help";

/// Run the REPL on stdin/stdout until EOF or `:quit`.
pub fn start() -> io::Result<()> {
    let session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(stdin.lock(), &mut stdout, &session)
}

/// Run the REPL over arbitrary streams.
pub fn run<R: BufRead, W: Write>(mut input: R, output: &mut W, session: &Session) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            ":quit" | ":q" => break,
            ":help" | ":h" => writeln!(output, "{HELP}")?,
            "" => {}
            source => match session.run_line(source) {
                Ok(Some(value)) => writeln!(output, "{}", value.inspect())?,
                Ok(None) => {}
                Err(error @ SessionError::Parse(_)) => {
                    writeln!(output, "Woops! We ran into some monkey business here!")?;
                    writeln!(output, " {error}")?;
                }
                Err(SessionError::Macro(error)) => writeln!(output, "macro error: {error}")?,
            },
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
