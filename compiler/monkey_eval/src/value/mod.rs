//! Runtime values.
//!
//! [`Object`] is a closed enum; every heap-backed variant holds a
//! [`Heap`], which can only be created through the factory methods here.
//! `ReturnValue` and `Error` are control signals: the evaluator unwraps or
//! propagates them and never stores them in a binding or collection.

mod heap;

use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};

use monkey_ir::{BlockStatement, Name, Node};
use rustc_hash::{FxHashMap, FxHasher};

use crate::{Environment, EvalError, PrintHandler};

pub use heap::Heap;

/// Signature of a native builtin.
pub type BuiltinFn = fn(&[Object], &PrintHandler) -> Object;

/// A native function in the builtin namespace.
#[derive(Copy, Clone)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

/// A closure: parameters, body and the environment it was created in.
pub struct Function {
    pub parameters: Vec<Name>,
    pub body: BlockStatement,
    pub env: Environment,
}

/// A macro definition. Same shape as [`Function`]; only ever stored in the
/// macro environment and consumed by expansion.
pub struct Macro {
    pub parameters: Vec<Name>,
    pub body: BlockStatement,
    pub env: Environment,
}

/// Which hashable kind produced a [`HashKey`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashKind {
    Integer,
    Boolean,
    Str,
}

/// Digest used to index hash literals.
///
/// Equal values always give equal keys. Distinct strings may collide; the
/// later insertion wins, which is accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HashKey {
    pub kind: HashKind,
    pub value: u64,
}

/// A key/value entry; the original key is kept for display.
#[derive(Clone, Debug)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}

/// Hash contents in insertion order.
#[derive(Clone, Debug, Default)]
pub struct HashObject {
    pairs: FxHashMap<HashKey, HashPair>,
    order: Vec<HashKey>,
}

impl HashObject {
    pub fn new() -> Self {
        HashObject::default()
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: HashKey, pair: HashPair) {
        if self.pairs.insert(key, pair).is_none() {
            self.order.push(key);
        }
    }

    pub fn get(&self, key: &HashKey) -> Option<&HashPair> {
        self.pairs.get(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HashPair> {
        self.order.iter().filter_map(|key| self.pairs.get(key))
    }
}

/// A Monkey runtime value.
#[derive(Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
    Str(Heap<String>),
    Array(Heap<Vec<Object>>),
    Hash(Heap<HashObject>),
    Function(Heap<Function>),
    Builtin(Builtin),
    ReturnValue(Heap<Object>),
    Error(Heap<EvalError>),
    Quote(Heap<Node>),
    Macro(Heap<Macro>),
}

impl Object {
    pub const TRUE: Object = Object::Boolean(true);
    pub const FALSE: Object = Object::Boolean(false);
    pub const NULL: Object = Object::Null;

    #[inline]
    pub fn from_bool(value: bool) -> Object {
        if value {
            Object::TRUE
        } else {
            Object::FALSE
        }
    }

    pub fn string(value: impl Into<String>) -> Object {
        Object::Str(Heap::new(value.into()))
    }

    pub fn array(elements: Vec<Object>) -> Object {
        Object::Array(Heap::new(elements))
    }

    pub fn hash(hash: HashObject) -> Object {
        Object::Hash(Heap::new(hash))
    }

    pub fn function(parameters: Vec<Name>, body: BlockStatement, env: Environment) -> Object {
        Object::Function(Heap::new(Function {
            parameters,
            body,
            env,
        }))
    }

    pub fn macro_def(parameters: Vec<Name>, body: BlockStatement, env: Environment) -> Object {
        Object::Macro(Heap::new(Macro {
            parameters,
            body,
            env,
        }))
    }

    pub fn return_value(value: Object) -> Object {
        Object::ReturnValue(Heap::new(value))
    }

    #[cold]
    pub fn error(error: impl Into<EvalError>) -> Object {
        Object::Error(Heap::new(error.into()))
    }

    pub fn quote(node: Node) -> Object {
        Object::Quote(Heap::new(node))
    }

    /// Kind name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::Null => "NULL",
            Object::Str(_) => "STRING",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
            Object::Quote(_) => "QUOTE",
            Object::Macro(_) => "MACRO",
        }
    }

    /// Only `false` and `null` are falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// `Error` or `ReturnValue`: a value that must travel outward
    /// untouched.
    #[inline]
    pub fn is_signal(&self) -> bool {
        matches!(self, Object::Error(_) | Object::ReturnValue(_))
    }

    /// Digest for use as a hash key, if this kind is hashable.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(n) => Some(HashKey {
                kind: HashKind::Integer,
                value: u64::from_ne_bytes(n.to_ne_bytes()),
            }),
            Object::Boolean(b) => Some(HashKey {
                kind: HashKind::Boolean,
                value: u64::from(*b),
            }),
            Object::Str(s) => {
                let mut hasher = FxHasher::default();
                s.as_str().hash(&mut hasher);
                Some(HashKey {
                    kind: HashKind::Str,
                    value: hasher.finish(),
                })
            }
            _ => None,
        }
    }

    /// Identity comparison, used by `==` and `!=` outside the integer and
    /// string cases. Scalars compare by value; heap values by allocation.
    pub fn identical(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::Str(a), Object::Str(b)) => a.ptr_eq(b),
            (Object::Array(a), Object::Array(b)) => a.ptr_eq(b),
            (Object::Hash(a), Object::Hash(b)) => a.ptr_eq(b),
            (Object::Function(a), Object::Function(b)) => a.ptr_eq(b),
            (Object::Builtin(a), Object::Builtin(b)) => a.name == b.name,
            (Object::ReturnValue(a), Object::ReturnValue(b)) => a.ptr_eq(b),
            (Object::Error(a), Object::Error(b)) => a.ptr_eq(b),
            (Object::Quote(a), Object::Quote(b)) => a.ptr_eq(b),
            (Object::Macro(a), Object::Macro(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Human-readable form, as printed by the REPL and `puts`.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    fn write_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Str(s) => write!(f, "{}", Node::Str(s.as_str().to_owned())),
            other => write!(f, "{other}"),
        }
    }
}

fn write_parameters(f: &mut fmt::Formatter<'_>, parameters: &[Name]) -> fmt::Result {
    for (i, parameter) in parameters.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{parameter}")?;
    }
    Ok(())
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(n) => write!(f, "{n}"),
            Object::Boolean(b) => write!(f, "{b}"),
            Object::Null => f.write_str("null"),
            Object::Str(s) => f.write_str(s),
            Object::Array(elements) => {
                f.write_char('[')?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    element.write_nested(f)?;
                }
                f.write_char(']')
            }
            Object::Hash(hash) => {
                f.write_char('{')?;
                for (i, pair) in hash.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    pair.key.write_nested(f)?;
                    f.write_str(": ")?;
                    pair.value.write_nested(f)?;
                }
                f.write_char('}')
            }
            Object::Function(function) => {
                f.write_str("fn(")?;
                write_parameters(f, &function.parameters)?;
                write!(f, ") {}", function.body)
            }
            Object::Builtin(_) => f.write_str("builtin function"),
            Object::ReturnValue(value) => write!(f, "{}", **value),
            Object::Error(error) => write!(f, "ERROR: {}", **error),
            Object::Quote(node) => write!(f, "QUOTE({})", **node),
            Object::Macro(mac) => {
                f.write_str("macro(")?;
                write_parameters(f, &mac.parameters)?;
                write!(f, ") {}", mac.body)
            }
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(n) => write!(f, "Integer({n})"),
            Object::Boolean(b) => write!(f, "Boolean({b})"),
            Object::Null => f.write_str("Null"),
            Object::Str(s) => write!(f, "Str({:?})", s.as_str()),
            Object::Error(error) => write!(f, "Error({:?})", error.message()),
            other => write!(f, "{}({})", other.kind(), other),
        }
    }
}

/// Structural equality for scalars, strings, collections, quotes and
/// errors; functions and macros compare by identity.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Str(a), Object::Str(b)) => a.as_str() == b.as_str(),
            (Object::Array(a), Object::Array(b)) => **a == **b,
            (Object::Hash(a), Object::Hash(b)) => {
                a.len() == b.len()
                    && a.iter().all(|pair| {
                        pair.key
                            .hash_key()
                            .and_then(|key| b.get(&key))
                            .is_some_and(|other| other.value == pair.value)
                    })
            }
            (Object::ReturnValue(a), Object::ReturnValue(b)) => **a == **b,
            (Object::Error(a), Object::Error(b)) => **a == **b,
            (Object::Quote(a), Object::Quote(b)) => **a == **b,
            _ => self.identical(other),
        }
    }
}
