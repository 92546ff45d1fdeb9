//! Interned identifier.

use std::fmt;

use crate::interner::StringInterner;

/// Interned string identifier.
///
/// A `Name` is an index into the process-wide [`StringInterner`]. Two
/// `Name`s are equal exactly when their strings are equal, so environment
/// lookups compare and hash a single `u32`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Intern `s` in the global interner.
    #[inline]
    pub fn intern(s: &str) -> Name {
        StringInterner::global().intern(s)
    }

    #[inline]
    pub(crate) const fn from_raw(index: u32) -> Self {
        Name(index)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The interned string.
    #[inline]
    pub fn as_str(self) -> &'static str {
        StringInterner::global().lookup(self)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", self.as_str())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name::intern(s)
    }
}
