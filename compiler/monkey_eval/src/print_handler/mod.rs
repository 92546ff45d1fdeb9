//! Print handler for configurable output.
//!
//! `puts` writes through the evaluator's handler so output can go to
//! stdout, into a buffer for tests and embedding, or nowhere. Enum
//! dispatch keeps this a plain match on the hot path.

use std::cell::RefCell;

#[derive(Default)]
pub enum PrintHandler {
    /// Writes to stdout.
    #[default]
    Stdout,
    /// Captures output in memory.
    Buffer(RefCell<String>),
    /// Discards all output.
    Silent,
}

impl PrintHandler {
    pub fn stdout() -> Self {
        PrintHandler::Stdout
    }

    pub fn buffer() -> Self {
        PrintHandler::Buffer(RefCell::new(String::new()))
    }

    pub fn silent() -> Self {
        PrintHandler::Silent
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            PrintHandler::Stdout => println!("{msg}"),
            PrintHandler::Buffer(buffer) => {
                let mut buf = buffer.borrow_mut();
                buf.push_str(msg);
                buf.push('\n');
            }
            PrintHandler::Silent => {}
        }
    }

    /// Everything captured so far. Empty for handlers that don't capture.
    pub fn output(&self) -> String {
        match self {
            PrintHandler::Buffer(buffer) => buffer.borrow().clone(),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }

    /// Drop captured output.
    pub fn clear(&self) {
        if let PrintHandler::Buffer(buffer) = self {
            buffer.borrow_mut().clear();
        }
    }
}
