//! Tree-level behavior observed through the public store API: lookup
//! correctness, insertion idempotence, declaration order, heavy churn.

use proptree::{Interner, JsValue, PropertyStore};

use super::intern_all;

#[test]
fn test_lookup_finds_exactly_the_live_keys() {
    let mut interner = Interner::new();
    let mut store = PropertyStore::new();

    let keys = intern_all(
        &mut interner,
        &["alpha", "beta", "gamma", "delta", "epsilon"],
    );
    for (i, name) in keys.iter().enumerate() {
        store.insert(name).value = JsValue::Number(i as f64);
    }

    store.delete(&keys[1]);
    store.delete(&keys[3]);

    for (i, name) in keys.iter().enumerate() {
        let found = store.lookup(name);
        if i == 1 || i == 3 {
            assert!(found.is_none(), "{name} should be deleted");
        } else {
            let rec = found.unwrap();
            assert_eq!(rec.name(), name);
            assert_eq!(rec.value, JsValue::Number(i as f64));
        }
    }
    let never = interner.get_or_insert("never-inserted");
    assert!(store.lookup(&never).is_none());
}

#[test]
fn test_insert_returns_same_record() {
    let mut interner = Interner::new();
    let mut store = PropertyStore::new();
    let key = interner.get_or_insert("key");

    store.insert(&key).value = JsValue::Number(7.0);
    // Second insert is a get: value untouched, no duplicate entry.
    let rec = store.insert(&key);
    assert_eq!(rec.value, JsValue::Number(7.0));
    assert_eq!(store.len(), 1);
    assert_eq!(store.ordered().count(), 1);
}

#[test]
fn test_declaration_order_survives_tree_rotations() {
    let mut interner = Interner::new();
    let mut store = PropertyStore::new();

    // Ascending keys force repeated splits; declaration order must be
    // unaffected by the rebalancing.
    let keys: Vec<String> = (0..64).map(|i| format!("k{i:02}")).collect();
    for key in &keys {
        let name = interner.get_or_insert(key);
        store.insert(&name);
    }

    let listed: Vec<String> = store.ordered().map(|r| r.name().to_string()).collect();
    assert_eq!(listed, keys);
}

#[test]
fn test_reinserted_key_moves_to_latest_position() {
    let mut interner = Interner::new();
    let mut store = PropertyStore::new();
    let keys = intern_all(&mut interner, &["first", "second", "third"]);
    for name in &keys {
        store.insert(name);
    }

    store.delete(&keys[0]);
    store.insert(&keys[0]);

    let listed: Vec<String> = store.ordered().map(|r| r.name().to_string()).collect();
    assert_eq!(listed, ["second", "third", "first"]);
}

#[test]
fn test_insert_delete_churn() {
    let mut interner = Interner::new();
    let mut store = PropertyStore::new();

    // Grow, shrink from both ends of key space, regrow.
    for i in 0..200 {
        let name = interner.get_or_insert(&format!("n{i:03}"));
        store.insert(&name).value = JsValue::Number(i as f64);
    }
    for i in (0..100).chain(150..200) {
        let name = interner.get_or_insert(&format!("n{i:03}"));
        store.delete(&name);
    }
    assert_eq!(store.len(), 50);

    for i in 100..150 {
        let name = interner.get_or_insert(&format!("n{i:03}"));
        let rec = store.lookup(&name).unwrap();
        assert_eq!(rec.value, JsValue::Number(i as f64));
    }

    for i in 0..100 {
        let name = interner.get_or_insert(&format!("n{i:03}"));
        store.insert(&name);
    }
    assert_eq!(store.len(), 150);
}

#[test]
fn test_delete_everything_empties_the_store() {
    let mut interner = Interner::new();
    let mut store = PropertyStore::new();

    let count = 100;
    for i in 0..count {
        // Interleaved spelling so insertion order is not sorted order.
        let name = interner.get_or_insert(&format!("{}{i}", if i % 2 == 0 { "a" } else { "z" }));
        store.insert(&name);
    }
    assert_eq!(store.len(), count);

    // Delete odd positions first, then the rest.
    for i in (1..count).step_by(2).chain((0..count).step_by(2)) {
        let name = interner.get_or_insert(&format!("{}{i}", if i % 2 == 0 { "a" } else { "z" }));
        store.delete(&name);
    }

    assert!(store.is_empty());
    assert_eq!(store.ordered().count(), 0);
}
