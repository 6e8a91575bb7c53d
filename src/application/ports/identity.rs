// src/application/ports/identity.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;

/// Opaque signed-in identity as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: String,
}

/// A signed-in identity together with the bearer token issued for it.
/// Only a client presenting `token` acts as `identity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub identity: Identity,
    pub token: String,
}

/// Provider-side authentication state. `Unresolved` only exists until the
/// provider has finished restoring any previous session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unresolved,
    SignedOut,
    SignedIn(Identity),
}

impl AuthState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::SignedIn(identity) => Some(identity),
            _ => None,
        }
    }
}

pub const CODE_USER_NOT_FOUND: &str = "auth/user-not-found";
pub const CODE_WRONG_PASSWORD: &str = "auth/wrong-password";
pub const CODE_INVALID_CREDENTIAL: &str = "auth/invalid-credential";
pub const CODE_INTERNAL: &str = "auth/internal-error";

/// Failure reported by the identity provider, identified by a
/// provider-specific code such as `auth/wrong-password`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({code})")]
pub struct ProviderError {
    pub code: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Start a session. Any previously issued token stops being valid.
    async fn sign_in(&self, email: &str, secret: &str) -> Result<Session, ProviderError>;
    async fn sign_out(&self) -> Result<(), ProviderError>;
    /// State-change channel. The current value is the latest state.
    fn subscribe(&self) -> watch::Receiver<AuthState>;
    /// The identity bound to `token`, if it belongs to the live session.
    fn authenticate(&self, token: &str) -> Option<Identity>;
}
