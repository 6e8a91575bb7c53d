// src/infrastructure/storage/mod.rs
mod file;
mod json;
mod memory;

pub use file::FileStore;
pub use json::JsonStorage;
pub use memory::MemoryStore;

use crate::application::ports::storage::{StorageError, StorageResult};

/// Keys double as file names for [`FileStore`], so both backends accept the
/// same restricted alphabet.
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
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
