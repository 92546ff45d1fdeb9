//! Chained lexical environments.
//!
//! An [`Environment`] is a shared handle to one scope frame. Each frame
//! holds its own bindings and a handle to the enclosing frame, so a chain
//! always ends at a root created by [`Environment::new`]. Closures keep
//! the frame they were created in alive by holding a clone of the handle.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use monkey_ir::Name;
use rustc_hash::FxHashMap;

use crate::Object;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// One frame of bindings.
struct Scope {
    bindings: FxHashMap<Name, Object>,
    outer: Option<Environment>,
}

/// Shared handle to a scope frame and, through it, its enclosing chain.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A new root frame.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            outer: None,
        }))
    }

    /// A new frame whose lookups fall back to `outer`.
    pub fn new_enclosed(outer: &Environment) -> Self {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            outer: Some(outer.clone()),
        }))
    }

    /// Look `name` up in this frame, then outward.
    pub fn get(&self, name: Name) -> Option<Object> {
        let scope = self.0.borrow();
        if let Some(value) = scope.bindings.get(&name) {
            return Some(value.clone());
        }
        scope.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Bind `name` in this frame. Never touches an outer frame.
    pub fn set(&self, name: Name, value: Object) {
        self.0.borrow_mut().bindings.insert(name, value);
    }

    /// Whether `name` is bound in this frame itself.
    pub fn contains_local(&self, name: Name) -> bool {
        self.0.borrow().bindings.contains_key(&name)
    }

    /// The enclosing frame, if any.
    pub fn outer(&self) -> Option<Environment> {
        self.0.borrow().outer.clone()
    }

    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(|name| name.as_str()).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("bindings", &names)
            .field("has_outer", &scope.outer.is_some())
            .finish()
    }
}
