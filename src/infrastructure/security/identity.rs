// src/infrastructure/security/identity.rs
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::watch;
use uuid::Uuid;

use crate::application::{
    error::ApplicationError,
    ports::{
        identity::{
            AuthState, CODE_INTERNAL, CODE_USER_NOT_FOUND, CODE_WRONG_PASSWORD, Identity,
            IdentityProvider, ProviderError, Session,
        },
        security::PasswordHasher,
    },
};
use crate::infrastructure::storage::JsonStorage;

pub const SESSION_KEY: &str = "auth-session";

/// The single admin account this provider knows about.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub email: String,
    pub password_hash: String,
}

/// Identity provider for a single configured admin. The live [`Session`]
/// is kept in the key-value store so a restart does not sign the admin out.
/// One session exists at a time: signing in again replaces the token.
///
/// The provider starts out [`AuthState::Unresolved`]; [`restore`] resolves it.
///
/// [`restore`]: LocalIdentityProvider::restore
pub struct LocalIdentityProvider {
    account: Option<AdminAccount>,
    hasher: Arc<dyn PasswordHasher>,
    sessions: JsonStorage,
    active: Mutex<Option<Session>>,
    state: watch::Sender<AuthState>,
}

impl LocalIdentityProvider {
    pub fn new(
        account: Option<AdminAccount>,
        hasher: Arc<dyn PasswordHasher>,
        sessions: JsonStorage,
    ) -> Self {
        let (state, _) = watch::channel(AuthState::Unresolved);
        Self {
            account,
            hasher,
            sessions,
            active: Mutex::new(None),
            state,
        }
    }

    /// Resolve the initial state from the persisted session, if any.
    /// A session for an account that is no longer configured is discarded.
    pub fn restore(&self) {
        let restored = match self.sessions.read::<Session>(SESSION_KEY) {
            Ok(Some(session)) if self.is_admin(&session.identity.email) => Some(session),
            Ok(Some(_)) => {
                tracing::info!("discarding session for unknown account");
                if let Err(err) = self.sessions.remove(SESSION_KEY) {
                    tracing::error!(error = %err, "failed to discard stale session");
                }
                None
            }
            Ok(None) => None,
            Err(err) => {
                tracing::error!(error = %err, "failed to read persisted session");
                None
            }
        };

        self.activate(restored);
    }

    /// Swap the live session and publish the matching state.
    fn activate(&self, session: Option<Session>) {
        let next = session
            .as_ref()
            .map_or(AuthState::SignedOut, |s| AuthState::SignedIn(s.identity.clone()));
        *self.active() = session;
        self.state.send_replace(next);
    }

    fn active(&self) -> MutexGuard<'_, Option<Session>> {
        // The guarded value is replaced wholesale, so a poisoned lock still
        // holds a consistent session.
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_admin(&self, email: &str) -> bool {
        self.account
            .as_ref()
            .is_some_and(|account| account.email == email)
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn sign_in(&self, email: &str, secret: &str) -> Result<Session, ProviderError> {
        let account = self
            .account
            .as_ref()
            .filter(|account| account.email == email)
            .ok_or_else(|| ProviderError::new(CODE_USER_NOT_FOUND, "no such user"))?;

        match self.hasher.verify(secret, &account.password_hash).await {
            Ok(()) => {}
            Err(ApplicationError::Unauthorized(_)) => {
                return Err(ProviderError::new(CODE_WRONG_PASSWORD, "wrong password"));
            }
            Err(err) => return Err(ProviderError::new(CODE_INTERNAL, err.to_string())),
        }

        let session = Session {
            identity: Identity {
                uid: Uuid::new_v4().to_string(),
                email: account.email.clone(),
            },
            token: Uuid::new_v4().simple().to_string(),
        };
        if let Err(err) = self.sessions.write(SESSION_KEY, &session) {
            // Still signed in for this process; only persistence is lost.
            tracing::error!(error = %err, "failed to persist session");
        }
        self.activate(Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.sessions
            .remove(SESSION_KEY)
            .map_err(|err| ProviderError::new(CODE_INTERNAL, err.to_string()))?;
        self.activate(None);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    fn authenticate(&self, token: &str) -> Option<Identity> {
        self.active()
            .as_ref()
            .filter(|session| !token.is_empty() && session.token == token)
            .map(|session| session.identity.clone())
    }
}
