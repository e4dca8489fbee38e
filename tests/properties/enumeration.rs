//! Enumeration semantics: shadowing across the prototype chain, snapshot
//! liveness, and the historical shadowing asymmetry.

use std::rc::Rc;

use proptree::{
    Attributes, Interner, JsObject, JsValue, get_property, new_iterator, next_iterator,
};

use super::drain;

#[test]
fn test_enumerable_shadowing_suppresses_base_property() {
    let mut interner = Interner::new();
    let x = interner.get_or_insert("x");
    let y = interner.get_or_insert("y");

    let base = JsObject::new();
    base.borrow_mut().set_property(&x, JsValue::Number(1.0));
    base.borrow_mut().set_property(&y, JsValue::Number(2.0));

    let derived = JsObject::with_prototype(Rc::clone(&base));
    derived.borrow_mut().set_property(&x, JsValue::Number(10.0));

    // "x" comes from the derived layer only; "y" from the base.
    let io = new_iterator(&derived, false);
    assert_eq!(drain(&io), ["x", "y"]);
}

#[test]
fn test_non_enumerable_derived_property_does_not_shadow() {
    let mut interner = Interner::new();
    let x = interner.get_or_insert("x");

    let base = JsObject::new();
    base.borrow_mut().set_property(&x, JsValue::Number(1.0));

    let derived = JsObject::with_prototype(Rc::clone(&base));
    derived
        .borrow_mut()
        .define_property(&x, JsValue::Number(2.0), Attributes::dont_enum());

    // Resolution always stops at the derived layer...
    assert_eq!(
        get_property(&derived, &x).map(|(v, _)| v),
        Some(JsValue::Number(2.0))
    );

    // ...but enumeration still yields "x" from the base layer: the
    // non-enumerable derived property does not count as a shadow.
    let io = new_iterator(&derived, false);
    assert_eq!(drain(&io), ["x"]);
}

#[test]
fn test_shadow_check_spans_intermediate_layers() {
    let mut interner = Interner::new();
    let x = interner.get_or_insert("x");

    let grandparent = JsObject::new();
    grandparent.borrow_mut().set_property(&x, JsValue::Number(1.0));
    let parent = JsObject::with_prototype(Rc::clone(&grandparent));
    parent.borrow_mut().set_property(&x, JsValue::Number(2.0));
    let child = JsObject::with_prototype(Rc::clone(&parent));

    // The parent's enumerable "x" shadows the grandparent's; one yield.
    let io = new_iterator(&child, false);
    assert_eq!(drain(&io), ["x"]);
}

#[test]
fn test_liveness_deleted_names_are_skipped() {
    let mut interner = Interner::new();
    let keys: Vec<_> = ["a", "b", "c"]
        .iter()
        .map(|k| interner.get_or_insert(k))
        .collect();

    let obj = JsObject::new();
    for name in &keys {
        obj.borrow_mut().set_property(name, JsValue::Number(0.0));
    }

    let io = new_iterator(&obj, false);
    // Delete "b" after the snapshot but before the first advance.
    obj.borrow_mut().delete_property(&keys[1]);

    assert_eq!(drain(&io), ["a", "c"]);
}

#[test]
fn test_deleted_name_satisfied_by_prototype_still_yields() {
    let mut interner = Interner::new();
    let x = interner.get_or_insert("x");

    let base = JsObject::new();
    base.borrow_mut().set_property(&x, JsValue::Number(1.0));
    let derived = JsObject::with_prototype(Rc::clone(&base));
    derived.borrow_mut().set_property(&x, JsValue::Number(2.0));

    let io = new_iterator(&derived, true);
    // The own "x" is gone, but the liveness re-check resolves through the
    // whole chain, so the inherited "x" keeps the name alive.
    derived.borrow_mut().delete_property(&x);
    assert_eq!(drain(&io), ["x"]);
}

#[test]
fn test_insertions_after_snapshot_are_invisible() {
    let mut interner = Interner::new();
    let a = interner.get_or_insert("a");
    let late = interner.get_or_insert("late");

    let obj = JsObject::new();
    obj.borrow_mut().set_property(&a, JsValue::Number(1.0));

    let io = new_iterator(&obj, false);
    obj.borrow_mut().set_property(&late, JsValue::Number(2.0));

    assert_eq!(drain(&io), ["a"]);
}

#[test]
fn test_own_only_ignores_prototype_layers() {
    let mut interner = Interner::new();
    let inherited = interner.get_or_insert("inherited");
    let own = interner.get_or_insert("own");

    let base = JsObject::new();
    base.borrow_mut()
        .set_property(&inherited, JsValue::Number(1.0));
    let derived = JsObject::with_prototype(Rc::clone(&base));
    derived.borrow_mut().set_property(&own, JsValue::Number(2.0));

    let io = new_iterator(&derived, true);
    assert_eq!(drain(&io), ["own"]);
}

#[test]
fn test_empty_object_yields_nothing() {
    let obj = JsObject::new();
    let io = new_iterator(&obj, false);
    assert!(next_iterator(&io).unwrap().is_none());
}

#[test]
fn test_next_on_plain_object_reports_misuse() {
    let obj = JsObject::new();
    let err = next_iterator(&obj).unwrap_err();
    assert!(err.to_string().contains("not an iterator"));
}
