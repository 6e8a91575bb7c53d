// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// `Err(ApplicationError::Unauthorized)` on mismatch; any other error
    /// means the hash itself could not be used.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}
