// tests/support/mocks/storage.rs
use folio_core::application::ports::storage::{KeyValueStore, StorageError, StorageResult};
use folio_core::infrastructure::storage::MemoryStore;
use std::sync::atomic::{AtomicBool, Ordering};

/// Every operation fails, as if the disk were gone.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable("read refused".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("write refused".into()))
    }

    fn delete(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("delete refused".into()))
    }
}

/// Memory-backed store whose writes can be switched off mid-test.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_writes: AtomicBool,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(StorageError::Unavailable("quota exceeded".into()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        self.check()?;
        self.inner.delete(key)
    }
}
