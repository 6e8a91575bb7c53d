use std::collections::HashMap;
use std::sync::RwLock;

use crate::application::ports::storage::{KeyValueStore, StorageError, StorageResult};

use super::validate_key;

/// Process-local store. Used for tests and `STORAGE_BACKEND=memory`.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StorageError {
        StorageError::Unavailable("memory store lock poisoned".into())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_delete() {
        let store = MemoryStore::new();
        assert_eq!(store.get("blog-articles").unwrap(), None);

        store.set("blog-articles", "[]").unwrap();
        assert_eq!(store.get("blog-articles").unwrap().as_deref(), Some("[]"));

        store.delete("blog-articles").unwrap();
        store.delete("blog-articles").unwrap();
        assert_eq!(store.get("blog-articles").unwrap(), None);
    }

    #[test]
    fn rejects_path_like_keys() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
