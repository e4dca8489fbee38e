//! Objects, prototype links, and prototype-chain property resolution.

use std::cell::RefCell;
use std::rc::Rc;

use crate::intern::Name;
use crate::iter::ForIn;
use crate::store::PropertyStore;
use crate::value::{Attributes, JsValue};

/// Reference to a heap-allocated object.
///
/// The subsystem is single-threaded; objects are shared via `Rc` and
/// interior mutability. Prototype links are read-only for this crate:
/// resolution walks them but never mutates or frees what they point at.
pub type JsObjectRef = Rc<RefCell<JsObject>>;

/// Behavior beyond plain property storage.
#[derive(Debug)]
pub enum ExoticKind {
    Ordinary,
    /// Array object carrying the stored length.
    Array { length: u32 },
    /// A for-in iterator produced by [`crate::new_iterator`].
    ForInIterator(ForIn),
}

/// An object: a property store plus a prototype link.
#[derive(Debug)]
pub struct JsObject {
    pub store: PropertyStore,
    pub prototype: Option<JsObjectRef>,
    pub exotic: ExoticKind,
}

impl JsObject {
    /// Create an ordinary object with no prototype and an empty store.
    pub fn new() -> JsObjectRef {
        Self::with_kind(None, ExoticKind::Ordinary)
    }

    /// Create an ordinary object inheriting from `prototype`.
    pub fn with_prototype(prototype: JsObjectRef) -> JsObjectRef {
        Self::with_kind(Some(prototype), ExoticKind::Ordinary)
    }

    /// Create an array object with the given initial length.
    pub fn array(length: u32) -> JsObjectRef {
        Self::with_kind(None, ExoticKind::Array { length })
    }

    pub(crate) fn with_kind(prototype: Option<JsObjectRef>, exotic: ExoticKind) -> JsObjectRef {
        Rc::new(RefCell::new(JsObject {
            store: PropertyStore::new(),
            prototype,
            exotic,
        }))
    }

    /// Check whether an own property exists, ignoring the prototype chain.
    pub fn has_own_property(&self, name: &Name) -> bool {
        self.store.lookup(name).is_some()
    }

    /// Read an own property's value and attributes, ignoring the
    /// prototype chain.
    pub fn get_own_property(&self, name: &Name) -> Option<(JsValue, Attributes)> {
        self.store
            .lookup(name)
            .map(|rec| (rec.value.clone(), rec.attrs))
    }

    /// Get or create the property `name`, then write `value` through it.
    /// A freshly created property keeps default (permissive) attributes.
    pub fn set_property(&mut self, name: &Name, value: JsValue) {
        self.store.insert(name).value = value;
    }

    /// Get or create the property `name` with explicit attributes.
    pub fn define_property(&mut self, name: &Name, value: JsValue, attrs: Attributes) {
        let rec = self.store.insert(name);
        rec.value = value;
        rec.attrs = attrs;
    }

    /// Delete an own property. No-op if absent.
    pub fn delete_property(&mut self, name: &Name) {
        self.store.delete(name);
    }

    /// Own enumerable property names in declaration order.
    pub fn own_enumerable_names(&self) -> Vec<Name> {
        self.store
            .ordered()
            .filter(|rec| rec.is_enumerable())
            .map(|rec| rec.name().clone())
            .collect()
    }
}

/// Resolve `name` along the prototype chain starting at `obj`.
///
/// Returns the value and attributes of the first match walking from the
/// most-derived object outward: an own property always shadows an inherited
/// one, regardless of enumerability on either side.
pub fn get_property(obj: &JsObjectRef, name: &Name) -> Option<(JsValue, Attributes)> {
    let mut current = Rc::clone(obj);
    loop {
        if let Some(found) = current.borrow().get_own_property(name) {
            return Some(found);
        }
        let proto = current.borrow().prototype.clone();
        match proto {
            Some(next) => current = next,
            None => return None,
        }
    }
}

/// Check whether `name` resolves anywhere on `obj`'s prototype chain.
pub fn has_property(obj: &JsObjectRef, name: &Name) -> bool {
    get_property(obj, name).is_some()
}
