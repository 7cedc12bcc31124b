// Keymap Storage Layer
// Local-storage style string key/value backends

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors surfaced by a storage backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Storage unavailable")]
    Unavailable,
}

/// A flat string key/value store, modelled on browser `localStorage`.
///
/// Reads of a missing key are `Ok(None)`, not an error.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// Check that a storage key is safe to use as a file stem
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("freej2me-keymapper-config").is_ok());
        assert!(validate_key("bindings_v1.backup").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("with space").is_err());
    }

    #[test]
    fn test_boxed_storage_delegates() {
        let shared = MemoryStorage::new();
        let mut boxed: Box<dyn Storage> = Box::new(shared.clone());
        boxed.set_item("k", "v").unwrap();
        assert_eq!(shared.get_item("k").unwrap().as_deref(), Some("v"));
        assert_eq!(boxed.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
