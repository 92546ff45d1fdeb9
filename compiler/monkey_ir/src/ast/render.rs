//! Canonical source rendering.
//!
//! Statements in a list are separated by a space; an expression statement
//! that is followed by another statement gets a `;` so the output re-parses
//! with the same statement boundaries.

use std::fmt::{self, Display, Formatter, Write};

use super::{BlockStatement, Node, Program};
use crate::Name;

fn write_statements(f: &mut Formatter<'_>, statements: &[Node]) -> fmt::Result {
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{statement}")?;
        let followed = i + 1 < statements.len();
        if followed && matches!(statement, Node::ExprStmt { .. }) {
            f.write_char(';')?;
        }
    }
    Ok(())
}

fn write_separated<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_params(f: &mut Formatter<'_>, keyword: &str, parameters: &[Name]) -> fmt::Result {
    f.write_str(keyword)?;
    f.write_char('(')?;
    write_separated(f, parameters)?;
    f.write_str(") ")
}

fn write_string_literal(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        write_statements(f, &self.statements)?;
        f.write_str(" }")
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Program(program) => write!(f, "{program}"),
            Node::Let { name, value } => write!(f, "let {name} = {value};"),
            Node::Return { value } => write!(f, "return {value};"),
            Node::ExprStmt { expression } => write!(f, "{expression}"),
            Node::Block(block) => write!(f, "{block}"),
            Node::Ident(name) => write!(f, "{name}"),
            // Negative literals only come from unquote; keep them re-parseable
            // as a prefix expression.
            Node::Int(value) if *value < 0 => write!(f, "(-{})", value.unsigned_abs()),
            Node::Int(value) => write!(f, "{value}"),
            Node::Bool(value) => write!(f, "{value}"),
            Node::Str(value) => write_string_literal(f, value),
            Node::Array { elements } => {
                f.write_char('[')?;
                write_separated(f, elements)?;
                f.write_char(']')
            }
            Node::Hash { pairs } => {
                f.write_char('{')?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_char('}')
            }
            Node::Prefix { op, right } => write!(f, "({}{right})", op.as_symbol()),
            Node::Infix { op, left, right } => {
                write!(f, "({left} {} {right})", op.as_symbol())
            }
            Node::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            }
            Node::Function { parameters, body } => {
                write_params(f, "fn", parameters)?;
                write!(f, "{body}")
            }
            Node::Macro { parameters, body } => {
                write_params(f, "macro", parameters)?;
                write!(f, "{body}")
            }
            Node::Call {
                function,
                arguments,
            } => {
                write!(f, "{function}(")?;
                write_separated(f, arguments)?;
                f.write_char(')')
            }
            Node::Index { left, index } => write!(f, "({left}[{index}])"),
        }
    }
}
