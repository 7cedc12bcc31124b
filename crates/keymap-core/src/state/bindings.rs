// Keymap Binding Store
// Action -> keys mapping with a derived key -> action index

use std::collections::HashMap;

use crate::action::{catalog, ActionInfo};
use crate::config::{default_bindings, BindingMap, LoadError, PersistedBindings, STORAGE_KEY};
use crate::storage::Storage;
use crate::{Action, KeyId};

/// Why a mutation was refused. The store is unchanged after any of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("{key} is already bound to {action}")]
    AlreadyBound { action: Action, key: KeyId },

    #[error("{key} is not bound to {action}")]
    NotBound { action: Action, key: KeyId },

    #[error("{action} would be left with no keys")]
    WouldEmpty { action: Action },
}

/// Owns the current bindings and keeps them persisted.
///
/// Invariants after every public call:
/// - every catalog action has a non-empty key list
/// - each key appears under at most one action
/// - `reverse` is exactly the inverse of `bindings`
///
/// Every successful mutation writes the whole document back to storage
/// before returning. Storage failures are logged and otherwise ignored.
#[derive(Debug)]
pub struct KeyBindingStore<S: Storage> {
    storage: S,
    storage_key: String,
    bindings: BindingMap,
    /// Rebuilt wholesale from `bindings`, never patched
    reverse: HashMap<KeyId, Action>,
}

impl<S: Storage> KeyBindingStore<S> {
    /// Create a store and load whatever `storage` holds
    pub fn new(storage: S) -> Self {
        Self::with_storage_key(storage, STORAGE_KEY)
    }

    /// Same as [`KeyBindingStore::new`] with a non-default storage key
    pub fn with_storage_key(storage: S, storage_key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            storage_key: storage_key.into(),
            bindings: default_bindings(),
            reverse: HashMap::new(),
        };
        store.load();
        store
    }

    /// Replace the in-memory state with the persisted one.
    ///
    /// Missing, unreadable, outdated or inconsistent data all end in
    /// [`KeyBindingStore::reset_to_defaults`].
    pub fn load(&mut self) {
        match self.read_persisted() {
            Ok(bindings) => {
                self.bindings = bindings;
                self.rebuild_index();
                log::debug!(
                    "Loaded {} key bindings from {:?}",
                    self.reverse.len(),
                    self.storage_key
                );
            }
            Err(LoadError::NotFound) => {
                log::info!("No saved key bindings, using defaults");
                self.reset_to_defaults();
            }
            Err(e) => {
                log::warn!("Failed to load key bindings, using defaults: {}", e);
                self.reset_to_defaults();
            }
        }
    }

    fn read_persisted(&self) -> Result<BindingMap, LoadError> {
        let content = self
            .storage
            .get_item(&self.storage_key)?
            .ok_or(LoadError::NotFound)?;
        PersistedBindings::from_json(&content)?.into_bindings()
    }

    /// Action bound to a physical key, if any
    pub fn lookup_action(&self, key: &str) -> Option<Action> {
        self.reverse.get(key).copied()
    }

    /// Current keys for an action id; empty for ids outside the catalog
    pub fn keys_for(&self, action_id: &str) -> &[KeyId] {
        Action::from_id(action_id)
            .map(|action| self.keys(action))
            .unwrap_or(&[])
    }

    /// Current keys for an action
    pub fn keys(&self, action: Action) -> &[KeyId] {
        self.bindings
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Catalog defaults for an action id, regardless of current bindings
    pub fn defaults_for(&self, action_id: &str) -> Vec<KeyId> {
        Action::from_id(action_id)
            .map(Action::defaults)
            .unwrap_or_default()
    }

    /// Bind `key` to `action_id`, taking it away from any other action.
    ///
    /// If that leaves the previous owner empty, the previous owner falls back
    /// to whichever of its defaults are still free.
    pub fn add_binding(&mut self, action_id: &str, key: &str) -> Result<(), BindingError> {
        let next = self.plan_add(action_id, key)?;
        self.commit(next);
        Ok(())
    }

    /// Whether [`KeyBindingStore::add_binding`] would succeed, without
    /// changing or persisting anything
    pub fn check_add(&self, action_id: &str, key: &str) -> Result<(), BindingError> {
        self.plan_add(action_id, key).map(|_| ())
    }

    fn plan_add(&self, action_id: &str, key: &str) -> Result<BindingMap, BindingError> {
        let action = parse_action(action_id)?;
        let key = KeyId::from(key);
        if self.keys(action).contains(&key) {
            return Err(BindingError::AlreadyBound { action, key });
        }

        let mut next = self.bindings.clone();
        let previous = self.lookup_action(key.as_str());
        if let Some(owner) = previous {
            next[&owner].retain(|k| k != &key);
        }
        next[&action].push(key.clone());

        if let Some(owner) = previous {
            if next[&owner].is_empty() {
                let refill = free_defaults(&next, owner);
                if refill.is_empty() {
                    return Err(BindingError::WouldEmpty { action: owner });
                }
                log::debug!("{} lost its last key, restoring {:?}", owner, refill);
                next[&owner] = refill;
            }
            log::debug!("Moving {} from {} to {}", key, owner, action);
        }

        Ok(next)
    }

    /// Unbind `key` from `action_id`.
    ///
    /// Removing the last key puts the action back on its (free) defaults.
    pub fn remove_binding(&mut self, action_id: &str, key: &str) -> Result<(), BindingError> {
        let action = parse_action(action_id)?;
        let Some(position) = self.keys(action).iter().position(|k| k == key) else {
            return Err(BindingError::NotBound {
                action,
                key: KeyId::from(key),
            });
        };

        let mut next = self.bindings.clone();
        next[&action].remove(position);
        if next[&action].is_empty() {
            let refill = free_defaults(&next, action);
            if refill.is_empty() {
                return Err(BindingError::WouldEmpty { action });
            }
            next[&action] = refill;
        }

        self.commit(next);
        Ok(())
    }

    /// Throw away every custom binding
    pub fn reset_to_defaults(&mut self) {
        self.commit(default_bindings());
    }

    /// The catalog, with labels and defaults
    pub fn actions(&self) -> Vec<ActionInfo> {
        catalog()
    }

    /// The whole current map, in catalog order
    pub fn bindings(&self) -> &BindingMap {
        &self.bindings
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn commit(&mut self, bindings: BindingMap) {
        self.bindings = bindings;
        self.rebuild_index();
        self.persist();
    }

    fn rebuild_index(&mut self) {
        self.reverse = self
            .bindings
            .iter()
            .flat_map(|(action, keys)| keys.iter().map(move |key| (key.clone(), *action)))
            .collect();
    }

    fn persist(&mut self) {
        let json = match PersistedBindings::from_bindings(&self.bindings).to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize key bindings: {}", e);
                return;
            }
        };
        match self.storage.set_item(&self.storage_key, &json) {
            Ok(()) => log::debug!("Saved key bindings to {:?}", self.storage_key),
            Err(e) => log::error!("Failed to save key bindings: {}", e),
        }
    }
}

fn parse_action(action_id: &str) -> Result<Action, BindingError> {
    Action::from_id(action_id).ok_or_else(|| BindingError::UnknownAction(action_id.to_string()))
}

/// Defaults of `action` that no other action currently holds
fn free_defaults(bindings: &BindingMap, action: Action) -> Vec<KeyId> {
    action
        .defaults()
        .into_iter()
        .filter(|key| {
            !bindings
                .iter()
                .any(|(other, keys)| *other != action && keys.contains(key))
        })
        .collect()
}
