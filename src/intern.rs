//! Name interning for property keys.
//!
//! Every property key that enters the store goes through an [`Interner`],
//! which ensures identical spellings share the same `Rc<str>` instance.
//! Interned [`Name`] handles compare equal by pointer identity on the fast
//! path and order by content, which is the total order the property tree
//! is keyed on.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

/// An interned property name.
///
/// Cloning is cheap (an `Rc` increment). Two names produced by the same
/// interner are equal iff they point at the same allocation; equality
/// still falls back to content comparison so names from different
/// interners behave correctly.
#[derive(Clone)]
pub struct Name(Rc<str>);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether two names share the same allocation.
    pub fn ptr_eq(a: &Name, b: &Name) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for Name {}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        if Rc::ptr_eq(&self.0, &other.0) {
            Ordering::Equal
        } else {
            self.0.cmp(&other.0)
        }
    }
}

impl std::hash::Hash for Name {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name(Rc::from(s))
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Name(Rc::from(s.as_str()))
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dictionary for deduplicating property names.
///
/// Names inserted into the interner are stored once and subsequent
/// requests for the same spelling return a cheap clone of the existing
/// instance.
pub struct Interner {
    /// Map from name content to the shared Name instance.
    /// Using Box<str> as key to avoid double-indirection through Rc.
    names: FxHashMap<Box<str>, Name>,
}

impl Interner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self {
            names: FxHashMap::default(),
        }
    }

    /// Create an interner pre-populated with common property names.
    pub fn with_common_names() -> Self {
        let mut interner = Self::new();
        for s in COMMON_NAMES {
            interner.get_or_insert(s);
        }
        interner
    }

    /// Get an existing name or intern a new one.
    /// Returns a cheap clone of the shared Name instance.
    pub fn get_or_insert(&mut self, s: &str) -> Name {
        if let Some(existing) = self.names.get(s) {
            return existing.clone();
        }
        let name = Name::from(s);
        self.names.insert(s.into(), name.clone());
        name
    }

    /// Get an existing name without interning.
    /// Returns None if the spelling has never been interned.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.names.get(s).cloned()
    }

    /// Number of unique names in the interner.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the interner is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

/// Property names that appear frequently in JavaScript-like object graphs.
const COMMON_NAMES: &[&str] = &[
    "length",
    "prototype",
    "constructor",
    "name",
    "message",
    "value",
    "writable",
    "enumerable",
    "configurable",
    "toString",
    "valueOf",
    "hasOwnProperty",
    "next",
    "done",
    "key",
    "index",
    "0",
    "1",
    "2",
    "3",
];
