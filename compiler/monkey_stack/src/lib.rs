//! Stack safety for deeply nested programs.
//!
//! Parsing, AST rewriting and tree-walking evaluation are all plain
//! recursion over the syntax tree, so a program like `((((...))))` or a
//! deeply recursive Monkey function can exhaust the native stack. Each of
//! those recursive entry points goes through [`ensure_sufficient_stack`].
//!
//! # Platform Support
//!
//! - **Native targets**: grows the stack on demand with `stacker`.
//! - **WASM targets**: plain passthrough.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval(&mut self, node: &Node, env: &Environment) -> Object {
///     ensure_sufficient_stack(|| self.eval_node(node, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
