//! Stored values and property attributes.
//!
//! The property store treats values as opaque payloads: nothing in the
//! tree or enumeration machinery inspects them. The embedding interpreter
//! supplies richer conversions; this module only carries enough of a value
//! type to store and compare in tests.

use std::fmt;

use crate::intern::Name;

/// A stored property value, opaque to the storage subsystem.
#[derive(Clone, PartialEq)]
pub enum JsValue {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(Name),
}

impl JsValue {
    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    pub fn type_of(&self) -> &'static str {
        match self {
            JsValue::Undefined => "undefined",
            JsValue::Null => "object",
            JsValue::Boolean(_) => "boolean",
            JsValue::Number(_) => "number",
            JsValue::String(_) => "string",
        }
    }
}

impl Default for JsValue {
    fn default() -> Self {
        JsValue::Undefined
    }
}

impl fmt::Debug for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "undefined"),
            JsValue::Null => write!(f, "null"),
            JsValue::Boolean(b) => write!(f, "{}", b),
            JsValue::Number(n) => write!(f, "{}", n),
            JsValue::String(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Boolean(b)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(n)
    }
}

impl From<i32> for JsValue {
    fn from(n: i32) -> Self {
        JsValue::Number(n as f64)
    }
}

impl From<Name> for JsValue {
    fn from(s: Name) -> Self {
        JsValue::String(s)
    }
}

/// Per-property attribute flags.
///
/// The storage subsystem reads only `enumerable` (it gates exposure through
/// for-in enumeration); `writable` and `configurable` are stored on behalf
/// of the embedding interpreter and never interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
}

impl Attributes {
    /// Fully permissive attributes, the state of a freshly created property.
    pub fn data() -> Self {
        Self {
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// Attributes hidden from enumeration.
    pub fn dont_enum() -> Self {
        Self {
            writable: true,
            enumerable: false,
            configurable: true,
        }
    }

    pub fn with_enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = enumerable;
        self
    }

    pub fn with_writable(mut self, writable: bool) -> Self {
        self.writable = writable;
        self
    }

    pub fn with_configurable(mut self, configurable: bool) -> Self {
        self.configurable = configurable;
        self
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::data()
    }
}
