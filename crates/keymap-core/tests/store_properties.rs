// Keymap Store Property Tests
//
// Drive the binding store through generated operation sequences and check
// the invariants after every step.
//
// Run with: cargo test -p keymap-core --test store_properties

use std::collections::HashMap;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use keymap_core::config::default_bindings;
use keymap_core::{Action, KeyBindingStore, KeyId, MemoryStorage};

// =========================================================================
// Strategies
// =========================================================================

#[derive(Clone, Debug)]
enum Op {
    Add(&'static str, String),
    Remove(&'static str, String),
    /// Remove the nth currently bound key of the action
    RemoveBound(&'static str, usize),
    Reset,
}

/// Default keys plus a handful of extras, so sequences hit both
/// reassignment and fresh keys
fn key_pool() -> Vec<String> {
    let mut pool: Vec<String> = Action::all()
        .flat_map(|a| a.default_keys().iter().map(|k| k.to_string()))
        .collect();
    for extra in ["KeyW", "KeyA", "KeyS", "KeyD", "Space", "KeyJ", "KeyK", "Tab"] {
        pool.push(extra.to_string());
    }
    pool
}

/// Catalog ids plus one that is not in the catalog
fn action_ids() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = Action::all().map(Action::id).collect();
    ids.push("FIRE");
    ids
}

fn action_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(action_ids())
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(key_pool())
}

fn add_strategy() -> impl Strategy<Value = Op> {
    (action_strategy(), key_strategy()).prop_map(|(action, key)| Op::Add(action, key))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        5 => add_strategy(),
        1 => (action_strategy(), key_strategy()).prop_map(|(a, k)| Op::Remove(a, k)),
        3 => (action_strategy(), 0usize..4).prop_map(|(a, i)| Op::RemoveBound(a, i)),
        1 => Just(Op::Reset),
    ]
}

fn apply(store: &mut KeyBindingStore<MemoryStorage>, op: &Op) -> bool {
    match op {
        Op::Add(action, key) => store.add_binding(action, key).is_ok(),
        Op::Remove(action, key) => store.remove_binding(action, key).is_ok(),
        Op::RemoveBound(action, index) => {
            let bound = store.keys_for(action);
            if bound.is_empty() {
                return store.remove_binding(action, "KeyW").is_ok();
            }
            let key = bound[index % bound.len()].to_string();
            store.remove_binding(action, &key).is_ok()
        }
        Op::Reset => {
            store.reset_to_defaults();
            true
        }
    }
}

fn check_invariants(store: &KeyBindingStore<MemoryStorage>) -> Result<(), TestCaseError> {
    let mut owners: HashMap<&KeyId, Action> = HashMap::new();
    for action in Action::all() {
        let keys = store.keys(action);
        prop_assert!(!keys.is_empty(), "{} has no keys", action);
        for key in keys {
            if let Some(first) = owners.insert(key, action) {
                return Err(TestCaseError::fail(format!(
                    "{} bound to {} and {}",
                    key, first, action
                )));
            }
        }
    }
    prop_assert_eq!(store.bindings().len(), Action::all().count());

    // lookup_action(k) == a  <=>  k in keys_for(a)
    for (key, action) in &owners {
        prop_assert_eq!(store.lookup_action(key.as_str()), Some(*action));
    }
    for key in key_pool() {
        match store.lookup_action(&key) {
            Some(action) => {
                prop_assert!(store.keys_for(action.id()).iter().any(|k| k.as_str() == key))
            }
            None => prop_assert!(!owners.contains_key(&KeyId::from(key.as_str()))),
        }
    }
    Ok(())
}

// =========================================================================
// Properties
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn add_sequences_keep_keys_unique(ops in prop::collection::vec(add_strategy(), 0..120)) {
        let mut store = KeyBindingStore::new(MemoryStorage::new());
        for op in &ops {
            apply(&mut store, op);
            check_invariants(&store)?;
        }
    }

    #[test]
    fn mixed_sequences_keep_every_action_bound(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut store = KeyBindingStore::new(MemoryStorage::new());
        for op in &ops {
            apply(&mut store, op);
            check_invariants(&store)?;
        }
    }

    #[test]
    fn rejected_operations_change_nothing(ops in prop::collection::vec(op_strategy(), 0..120)) {
        let mut store = KeyBindingStore::new(MemoryStorage::new());
        for op in &ops {
            let before = store.bindings().clone();
            if !apply(&mut store, op) {
                prop_assert_eq!(store.bindings(), &before);
            }
        }
    }

    #[test]
    fn persisted_state_round_trips(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let storage = MemoryStorage::new();
        let mut store = KeyBindingStore::new(storage.clone());
        for op in &ops {
            apply(&mut store, op);
        }

        let reloaded = KeyBindingStore::new(storage.clone());
        prop_assert_eq!(reloaded.bindings(), store.bindings());
        for action in Action::all() {
            prop_assert_eq!(reloaded.keys(action), store.keys(action));
        }
    }

    #[test]
    fn reset_is_idempotent(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut store = KeyBindingStore::new(MemoryStorage::new());
        for op in &ops {
            apply(&mut store, op);
        }

        store.reset_to_defaults();
        let once = store.bindings().clone();
        store.reset_to_defaults();
        prop_assert_eq!(store.bindings(), &once);
        prop_assert_eq!(once, default_bindings());
    }
}
