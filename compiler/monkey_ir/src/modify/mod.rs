//! Whole-tree rewrite.

use monkey_stack::ensure_sufficient_stack;

use crate::{BlockStatement, Name, Node, Program};

/// Rewrite `node` bottom-up.
///
/// Every child slot is replaced by its rewritten form first, then
/// `modifier` is applied to the node itself. The modifier sees each node
/// exactly once, children before parents.
///
/// Slots with a narrower shape than `Node` coerce the modifier's result:
/// - statement lists wrap a bare expression in an expression statement,
/// - block slots accept any node via [`BlockStatement::from_node`],
/// - parameter slots keep the original name unless the result is an
///   identifier.
pub fn modify<F>(node: Node, modifier: &mut F) -> Node
where
    F: FnMut(Node) -> Node,
{
    ensure_sufficient_stack(|| {
        let rewritten = modify_children(node, modifier);
        modifier(rewritten)
    })
}

fn modify_children<F>(node: Node, modifier: &mut F) -> Node
where
    F: FnMut(Node) -> Node,
{
    match node {
        Node::Program(program) => Node::Program(Program {
            statements: modify_statements(program.statements, modifier),
        }),
        Node::Block(block) => Node::Block(modify_block_contents(block, modifier)),
        Node::Let { name, value } => Node::Let {
            name,
            value: modify_boxed(value, modifier),
        },
        Node::Return { value } => Node::Return {
            value: modify_boxed(value, modifier),
        },
        Node::ExprStmt { expression } => Node::ExprStmt {
            expression: modify_boxed(expression, modifier),
        },
        Node::Array { elements } => Node::Array {
            elements: modify_all(elements, modifier),
        },
        Node::Hash { pairs } => Node::Hash {
            pairs: pairs
                .into_iter()
                .map(|(key, value)| (modify(key, modifier), modify(value, modifier)))
                .collect(),
        },
        Node::Prefix { op, right } => Node::Prefix {
            op,
            right: modify_boxed(right, modifier),
        },
        Node::Infix { op, left, right } => Node::Infix {
            op,
            left: modify_boxed(left, modifier),
            right: modify_boxed(right, modifier),
        },
        Node::If {
            condition,
            consequence,
            alternative,
        } => Node::If {
            condition: modify_boxed(condition, modifier),
            consequence: modify_block(consequence, modifier),
            alternative: alternative.map(|block| modify_block(block, modifier)),
        },
        Node::Function { parameters, body } => Node::Function {
            parameters: modify_params(parameters, modifier),
            body: modify_block(body, modifier),
        },
        Node::Macro { parameters, body } => Node::Macro {
            parameters: modify_params(parameters, modifier),
            body: modify_block(body, modifier),
        },
        Node::Call {
            function,
            arguments,
        } => Node::Call {
            function: modify_boxed(function, modifier),
            arguments: modify_all(arguments, modifier),
        },
        Node::Index { left, index } => Node::Index {
            left: modify_boxed(left, modifier),
            index: modify_boxed(index, modifier),
        },
        leaf @ (Node::Ident(_) | Node::Int(_) | Node::Bool(_) | Node::Str(_)) => leaf,
    }
}

fn modify_boxed<F>(node: Box<Node>, modifier: &mut F) -> Box<Node>
where
    F: FnMut(Node) -> Node,
{
    Box::new(modify(*node, modifier))
}

fn modify_all<F>(nodes: Vec<Node>, modifier: &mut F) -> Vec<Node>
where
    F: FnMut(Node) -> Node,
{
    nodes.into_iter().map(|node| modify(node, modifier)).collect()
}

fn modify_statements<F>(statements: Vec<Node>, modifier: &mut F) -> Vec<Node>
where
    F: FnMut(Node) -> Node,
{
    statements
        .into_iter()
        .map(|statement| modify(statement, modifier).into_statement())
        .collect()
}

fn modify_block_contents<F>(block: BlockStatement, modifier: &mut F) -> BlockStatement
where
    F: FnMut(Node) -> Node,
{
    BlockStatement {
        statements: modify_statements(block.statements, modifier),
    }
}

/// A block in a child slot is itself a node the modifier sees.
fn modify_block<F>(block: BlockStatement, modifier: &mut F) -> BlockStatement
where
    F: FnMut(Node) -> Node,
{
    BlockStatement::from_node(modify(Node::Block(block), modifier))
}

fn modify_params<F>(parameters: Vec<Name>, modifier: &mut F) -> Vec<Name>
where
    F: FnMut(Node) -> Node,
{
    parameters
        .into_iter()
        .map(|name| match modify(Node::Ident(name), modifier) {
            Node::Ident(renamed) => renamed,
            _ => name,
        })
        .collect()
}
