// Keymap Core Library
// Key bindings for the J2ME emulator front end

pub mod action;
pub mod capture;
pub mod config;
pub mod key;
pub mod settings;
pub mod state;
pub mod storage;

pub use action::{catalog, Action, ActionInfo};
pub use capture::{CaptureFilter, CaptureOutcome};
pub use config::{BindingMap, LoadError, PersistedBindings, CONFIG_VERSION, STORAGE_KEY};
pub use key::{friendly_key_name, KeyId};
pub use settings::{Settings, SettingsError};
pub use state::{BindingError, KeyBindingStore};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
