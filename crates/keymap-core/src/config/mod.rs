// Keymap Config
// Persisted binding document and its validation

pub mod persisted;

pub use persisted::{
    default_bindings, BindingMap, LoadError, PersistedBindings, CONFIG_VERSION, STORAGE_KEY,
};
