use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::{Storage, StorageError};

/// In-memory storage.
///
/// Clones share the same underlying map, so a store built on one handle and
/// a second store built on a clone see each other's writes, the way two page
/// loads see the same `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one item
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.items.lock().insert(key.to_string(), value.to_string());
        storage
    }

    /// Make every subsequent call fail with [`StorageError::Unavailable`]
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StorageError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.items.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_get_set() {
        let mut storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.get_item("missing").unwrap(), None);

        storage.set_item("a", "1").unwrap();
        storage.set_item("a", "2").unwrap();
        assert_eq!(storage.get_item("a").unwrap().as_deref(), Some("2"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_clones_share_items() {
        let mut first = MemoryStorage::new();
        let second = first.clone();
        first.set_item("shared", "yes").unwrap();
        assert_eq!(second.get_item("shared").unwrap().as_deref(), Some("yes"));
    }

    #[test]
    fn test_unavailable_fails_both_ways() {
        let mut storage = MemoryStorage::with_item("a", "1");
        storage.set_unavailable(true);
        assert!(matches!(storage.get_item("a"), Err(StorageError::Unavailable)));
        assert!(matches!(storage.set_item("a", "2"), Err(StorageError::Unavailable)));

        storage.set_unavailable(false);
        assert_eq!(storage.get_item("a").unwrap().as_deref(), Some("1"));
    }
}
