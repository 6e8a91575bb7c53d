use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};

use crate::application::ports::storage::{KeyValueStore, StorageError, StorageResult};

/// JSON codec over a [`KeyValueStore`].
#[derive(Clone)]
pub struct JsonStorage {
    store: Arc<dyn KeyValueStore>,
}

impl JsonStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn read<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Codec {
                key: key.to_string(),
                source,
            })
    }

    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Codec {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &raw)
    }

    pub fn remove(&self, key: &str) -> StorageResult<()> {
        self.store.delete(key)
    }

    pub fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.store.get(key)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStore;

    #[test]
    fn corrupt_values_surface_as_codec_errors() {
        let store = Arc::new(MemoryStore::new());
        store.set("blog-subscribers", "{not json").unwrap();
        let json = JsonStorage::new(store);

        let err = json.read::<Vec<String>>("blog-subscribers").unwrap_err();
        assert!(matches!(err, StorageError::Codec { .. }));
    }

    #[test]
    fn writes_compact_json() {
        let store = Arc::new(MemoryStore::new());
        let json = JsonStorage::new(store.clone());
        json.write("blog-subscribers", &["a@x.com"]).unwrap();
        assert_eq!(
            store.get("blog-subscribers").unwrap().as_deref(),
            Some(r#"["a@x.com"]"#)
        );
    }
}
