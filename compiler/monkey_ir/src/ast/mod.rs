//! Monkey abstract syntax tree.
//!
//! The tree is one closed enum, [`Node`], covering both statements and
//! expressions. Keeping a single node type lets the whole-tree rewrite
//! ([`crate::modify`]) take a plain `FnMut(Node) -> Node` and put the result
//! back into any child slot.
//!
//! Every node renders a canonical source string through `Display` (see
//! `render.rs`). Infix and prefix expressions are always fully
//! parenthesized and the output re-parses to the same tree.

mod render;

use crate::Name;

/// Root of a parsed source unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Node>,
}

impl Program {
    pub fn new(statements: Vec<Node>) -> Self {
        Program { statements }
    }

    #[inline]
    pub fn into_node(self) -> Node {
        Node::Program(self)
    }
}

/// `{ ... }` body of an `if` branch, function or macro.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockStatement {
    pub statements: Vec<Node>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Node>) -> Self {
        BlockStatement { statements }
    }

    /// Wrap an arbitrary node as a block body.
    ///
    /// A block node is unwrapped; an expression becomes a single expression
    /// statement; any other statement is kept as is.
    pub fn from_node(node: Node) -> Self {
        match node {
            Node::Block(block) => block,
            Node::Program(program) => BlockStatement {
                statements: program.statements,
            },
            other => BlockStatement {
                statements: vec![other.into_statement()],
            },
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrefixOp {
    /// `!`
    Not,
    /// `-`
    Neg,
}

impl PrefixOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            PrefixOp::Not => "!",
            PrefixOp::Neg => "-",
        }
    }
}

/// Binary operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InfixOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    Gt,
}

impl InfixOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::Eq => "==",
            InfixOp::NotEq => "!=",
            InfixOp::Lt => "<",
            InfixOp::Gt => ">",
        }
    }
}

/// Any AST node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    // Statements
    Program(Program),
    Let { name: Name, value: Box<Node> },
    Return { value: Box<Node> },
    ExprStmt { expression: Box<Node> },
    Block(BlockStatement),

    // Expressions
    Ident(Name),
    Int(i64),
    Bool(bool),
    Str(String),
    Array { elements: Vec<Node> },
    /// Key/value pairs in source order.
    Hash { pairs: Vec<(Node, Node)> },
    Prefix { op: PrefixOp, right: Box<Node> },
    Infix { op: InfixOp, left: Box<Node>, right: Box<Node> },
    If {
        condition: Box<Node>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    Function { parameters: Vec<Name>, body: BlockStatement },
    Call { function: Box<Node>, arguments: Vec<Node> },
    Index { left: Box<Node>, index: Box<Node> },
    Macro { parameters: Vec<Name>, body: BlockStatement },
}

impl Node {
    pub fn ident(name: &str) -> Node {
        Node::Ident(Name::intern(name))
    }

    pub fn prefix(op: PrefixOp, right: Node) -> Node {
        Node::Prefix {
            op,
            right: Box::new(right),
        }
    }

    pub fn infix(op: InfixOp, left: Node, right: Node) -> Node {
        Node::Infix {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn expr_stmt(expression: Node) -> Node {
        Node::ExprStmt {
            expression: Box::new(expression),
        }
    }

    pub fn call(function: Node, arguments: Vec<Node>) -> Node {
        Node::Call {
            function: Box::new(function),
            arguments,
        }
    }

    /// Whether the node may stand in a statement list as is.
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            Node::Program(_)
                | Node::Let { .. }
                | Node::Return { .. }
                | Node::ExprStmt { .. }
                | Node::Block(_)
        )
    }

    /// Wrap an expression in an expression statement; statements pass through.
    #[must_use]
    pub fn into_statement(self) -> Node {
        if self.is_statement() {
            self
        } else {
            Node::expr_stmt(self)
        }
    }

    /// Callee name when this is a call to a plain identifier.
    pub fn callee_name(&self) -> Option<Name> {
        match self {
            Node::Call { function, .. } => match function.as_ref() {
                Node::Ident(name) => Some(*name),
                _ => None,
            },
            _ => None,
        }
    }
}

impl From<Program> for Node {
    fn from(program: Program) -> Self {
        Node::Program(program)
    }
}
