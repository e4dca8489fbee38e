//! For-in enumeration: flatten a prototype chain's enumerable properties
//! into an iterator object.
//!
//! The iterator snapshots *which* names were present and enumerable at
//! construction time, in declaration order per layer, most-derived layer
//! first. Advancing re-checks each name against the live object, so
//! properties deleted mid-iteration are skipped; properties added after
//! construction are never seen.

use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::JsError;
use crate::intern::Name;
use crate::object::{ExoticKind, JsObject, JsObjectRef, has_property};

/// State of a for-in iterator object.
#[derive(Debug)]
pub struct ForIn {
    /// The object being enumerated. Not owned in any deep sense: the
    /// iterator never mutates it.
    target: JsObjectRef,
    /// Captured names, consumed front to back.
    pending: VecDeque<Name>,
}

/// A name is shadowed if some layer strictly more derived than `layer`
/// (i.e. between `target` and `layer`, excluding `layer`) holds an
/// *enumerable* property of the same name.
///
/// A non-enumerable same-named property in a more-derived layer does not
/// shadow, even though plain resolution would stop there. Historical
/// behavior of the enumeration protocol; preserved deliberately.
fn is_shadowed(target: &JsObjectRef, layer: &JsObjectRef, name: &Name) -> bool {
    let mut top = Rc::clone(target);
    while !Rc::ptr_eq(&top, layer) {
        if top
            .borrow()
            .store
            .lookup(name)
            .is_some_and(|rec| rec.is_enumerable())
        {
            return true;
        }
        let proto = top.borrow().prototype.clone();
        match proto {
            Some(next) => top = next,
            None => return false,
        }
    }
    false
}

/// Build a for-in iterator object over `target`.
///
/// Walks the prototype chain starting at `target` (only the first layer if
/// `own_only`); within each layer, walks properties in declaration order,
/// keeping the enumerable ones that are not shadowed by a more derived
/// layer.
pub fn new_iterator(target: &JsObjectRef, own_only: bool) -> JsObjectRef {
    let mut pending = VecDeque::new();
    let mut layer = Some(Rc::clone(target));
    while let Some(obj) = layer {
        {
            let guard = obj.borrow();
            for rec in guard.store.ordered() {
                if rec.is_enumerable() && !is_shadowed(target, &obj, rec.name()) {
                    pending.push_back(rec.name().clone());
                }
            }
        }
        if own_only {
            break;
        }
        layer = obj.borrow().prototype.clone();
    }

    JsObject::with_kind(
        None,
        ExoticKind::ForInIterator(ForIn {
            target: Rc::clone(target),
            pending,
        }),
    )
}

/// Advance a for-in iterator.
///
/// Pops captured names until one still resolves somewhere on the target's
/// prototype chain and returns it; returns `Ok(None)` once the snapshot is
/// exhausted. Errors with a TypeError when `io` is not an iterator object.
pub fn next_iterator(io: &JsObjectRef) -> Result<Option<Name>, JsError> {
    loop {
        // Pop under the borrow, resolve after releasing it: the liveness
        // check walks other objects' stores.
        let (name, target) = {
            let mut guard = io.borrow_mut();
            let ExoticKind::ForInIterator(ref mut it) = guard.exotic else {
                return Err(JsError::type_error("not an iterator"));
            };
            match it.pending.pop_front() {
                Some(name) => (name, Rc::clone(&it.target)),
                None => return Ok(None),
            }
        };
        if has_property(&target, &name) {
            return Ok(Some(name));
        }
    }
}
