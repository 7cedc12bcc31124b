// Keymap Persisted Bindings - JSON with Serde
// { "version": 1, "mappings": { "<ACTION_ID>": ["<KeyId>", ...] } }

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::storage::StorageError;
use crate::{Action, KeyId};

/// Storage key the document lives under
pub const STORAGE_KEY: &str = "freej2me-keymapper-config";

/// Format version written by this build; anything else is discarded on load
pub const CONFIG_VERSION: u32 = 1;

/// Action → keys, always in catalog order
pub type BindingMap = IndexMap<Action, Vec<KeyId>>;

/// Reasons a persisted document is not used
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no saved bindings")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported version {found} (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("missing mappings")]
    MissingMappings,

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("no entry for action {0}")]
    MissingAction(Action),

    #[error("action {0} has no keys")]
    EmptyKeys(Action),

    #[error("key {key} bound to both {first} and {second}")]
    DuplicateKey {
        key: KeyId,
        first: Action,
        second: Action,
    },
}

/// On-disk representation.
///
/// `mappings` stays keyed by raw strings so that an unknown or misspelled
/// action id surfaces as a validation error rather than a serde failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedBindings {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mappings: Option<IndexMap<String, Vec<KeyId>>>,
}

impl PersistedBindings {
    /// Snapshot a binding map at the current version
    pub fn from_bindings(bindings: &BindingMap) -> Self {
        let mappings = bindings
            .iter()
            .map(|(action, keys)| (action.id().to_string(), keys.clone()))
            .collect();
        Self {
            version: CONFIG_VERSION,
            mappings: Some(mappings),
        }
    }

    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Turn the document into a complete, invariant-respecting binding map.
    ///
    /// All-or-nothing: a single bad entry rejects the whole document.
    pub fn into_bindings(self) -> Result<BindingMap, LoadError> {
        if self.version != CONFIG_VERSION {
            return Err(LoadError::VersionMismatch {
                found: self.version,
                expected: CONFIG_VERSION,
            });
        }
        let mut mappings = self.mappings.ok_or(LoadError::MissingMappings)?;

        let mut owners: HashMap<KeyId, Action> = HashMap::new();
        let mut bindings = BindingMap::with_capacity(mappings.len());
        for action in Action::all() {
            let keys = mappings
                .shift_remove(action.id())
                .ok_or(LoadError::MissingAction(action))?;
            if keys.is_empty() {
                return Err(LoadError::EmptyKeys(action));
            }
            for key in &keys {
                if let Some(first) = owners.insert(key.clone(), action) {
                    return Err(LoadError::DuplicateKey {
                        key: key.clone(),
                        first,
                        second: action,
                    });
                }
            }
            bindings.insert(action, keys);
        }

        if let Some(unknown) = mappings.keys().next() {
            return Err(LoadError::UnknownAction(unknown.clone()));
        }

        Ok(bindings)
    }
}

/// Catalog defaults for every action
pub fn default_bindings() -> BindingMap {
    Action::all().map(|action| (action, action.defaults())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults_json() -> String {
        PersistedBindings::from_bindings(&default_bindings())
            .to_json()
            .unwrap()
    }

    #[test]
    fn test_document_layout() {
        let json = defaults_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["mappings"]["UP"], serde_json::json!(["ArrowUp"]));
        assert_eq!(
            value["mappings"]["KEY_0"],
            serde_json::json!(["Digit0", "Numpad0"])
        );
        // catalog order is preserved in the written object
        assert!(json.find("\"UP\"").unwrap() < json.find("\"HASH\"").unwrap());
    }

    #[test]
    fn test_defaults_document_validates() {
        let doc = PersistedBindings::from_json(&defaults_json()).unwrap();
        assert_eq!(doc.into_bindings().unwrap(), default_bindings());
    }

    #[test]
    fn test_version_mismatch() {
        let doc = PersistedBindings::from_json(r#"{"version":0,"mappings":{}}"#).unwrap();
        assert!(matches!(
            doc.into_bindings(),
            Err(LoadError::VersionMismatch { found: 0, expected: 1 })
        ));
    }

    #[test]
    fn test_missing_mappings() {
        let doc = PersistedBindings::from_json(r#"{"version":1}"#).unwrap();
        assert!(matches!(doc.into_bindings(), Err(LoadError::MissingMappings)));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        assert!(matches!(
            PersistedBindings::from_json("{not json"),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            PersistedBindings::from_json(r#"{"version":"1","mappings":{}}"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_action_rejected() {
        let mut bindings = default_bindings();
        bindings.shift_remove(&Action::Star);
        let doc = PersistedBindings::from_bindings(&bindings);
        assert!(matches!(
            doc.into_bindings(),
            Err(LoadError::MissingAction(Action::Star))
        ));
    }

    #[test]
    fn test_unknown_action_rejected() {
        let mut doc = PersistedBindings::from_bindings(&default_bindings());
        doc.mappings
            .as_mut()
            .unwrap()
            .insert("FIRE".to_string(), vec![KeyId::from("Space")]);
        match doc.into_bindings() {
            Err(LoadError::UnknownAction(id)) => assert_eq!(id, "FIRE"),
            other => panic!("expected UnknownAction, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_list_rejected() {
        let mut bindings = default_bindings();
        bindings.insert(Action::Select, vec![]);
        let doc = PersistedBindings::from_bindings(&bindings);
        assert!(matches!(
            doc.into_bindings(),
            Err(LoadError::EmptyKeys(Action::Select))
        ));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut bindings = default_bindings();
        bindings
            .get_mut(&Action::Down)
            .unwrap()
            .push(KeyId::from("ArrowUp"));
        let doc = PersistedBindings::from_bindings(&bindings);
        match doc.into_bindings() {
            Err(LoadError::DuplicateKey { key, first, second }) => {
                assert_eq!(key, "ArrowUp");
                assert_eq!(first, Action::Up);
                assert_eq!(second, Action::Down);
            }
            other => panic!("expected DuplicateKey, got {:?}", other),
        }
    }

    #[test]
    fn test_reordered_document_is_normalized() {
        let json = r#"{"version":1,"mappings":{
            "HASH":["NumpadDivide"],"STAR":["NumpadMultiply"],
            "KEY_9":["Digit9"],"KEY_8":["Digit8"],"KEY_7":["Digit7"],"KEY_6":["Digit6"],
            "KEY_5":["Digit5"],"KEY_4":["Digit4"],"KEY_3":["Digit3"],"KEY_2":["Digit2"],
            "KEY_1":["Digit1"],"KEY_0":["Digit0"],"MENU":["Escape"],"SOFT_RIGHT":["F2"],
            "SOFT_LEFT":["F1"],"OK":["Enter","Space"],"RIGHT":["ArrowRight"],
            "LEFT":["ArrowLeft"],"DOWN":["ArrowDown","KeyS"],"UP":["ArrowUp","KeyW"]}}"#;
        let bindings = PersistedBindings::from_json(json)
            .unwrap()
            .into_bindings()
            .unwrap();
        let order: Vec<Action> = bindings.keys().copied().collect();
        assert_eq!(order, Action::all().collect::<Vec<_>>());
        assert_eq!(bindings[&Action::Up], vec![KeyId::from("ArrowUp"), KeyId::from("KeyW")]);
    }
}
