// tests/support/mocks/security.rs
use async_trait::async_trait;
use folio_core::application::{ApplicationResult, error::ApplicationError, ports::security::PasswordHasher};

/// Treats the stored "hash" as the password itself, so tests skip argon2.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(password.to_string())
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if password == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("password mismatch"))
        }
    }
}
