// src/application/identity/gate.rs
use std::sync::Arc;

use tokio::{sync::watch, task::JoinHandle};

use crate::application::{
    dto::{AuthStateDto, IdentityDto},
    error::{ApplicationError, ApplicationResult},
    ports::identity::{
        AuthState, CODE_INVALID_CREDENTIAL, CODE_USER_NOT_FOUND, CODE_WRONG_PASSWORD, Identity,
        IdentityProvider, ProviderError, Session,
    },
};

pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";
pub const GENERIC_LOGIN_FAILURE: &str = "Failed to log in. Please try again.";

/// Login failures as the rest of the application sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    BadCredentials,
    Other,
}

impl LoginFailure {
    pub fn classify(code: &str) -> Self {
        match code {
            CODE_USER_NOT_FOUND | CODE_WRONG_PASSWORD | CODE_INVALID_CREDENTIAL => {
                Self::BadCredentials
            }
            _ => Self::Other,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::BadCredentials => INVALID_CREDENTIALS,
            Self::Other => GENERIC_LOGIN_FAILURE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGuard {
    Public,
    Protected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    Granted,
    /// The provider has not reported its initial state yet.
    Pending,
    RedirectToLogin,
}

/// Authenticated/unauthenticated switch in front of the admin surface.
///
/// The gate mirrors the provider's state through a single listener task.
/// A snapshot is published only when the state actually changes, and the
/// listener is aborted when the gate is dropped.
///
/// The snapshot says whether *an* admin session exists. Whether a given
/// client holds it is decided per request from the token it presents.
pub struct IdentityGate {
    provider: Arc<dyn IdentityProvider>,
    snapshot: watch::Receiver<AuthState>,
    listener: JoinHandle<()>,
}

impl IdentityGate {
    /// Must be called from within a tokio runtime.
    pub fn spawn(provider: Arc<dyn IdentityProvider>) -> Self {
        let mut upstream = provider.subscribe();
        let initial = upstream.borrow_and_update().clone();
        let (tx, snapshot) = watch::channel(initial);

        let listener = tokio::spawn(async move {
            while upstream.changed().await.is_ok() {
                let next = upstream.borrow_and_update().clone();
                let changed = tx.send_if_modified(|current| {
                    if *current == next {
                        false
                    } else {
                        *current = next.clone();
                        true
                    }
                });
                if changed {
                    tracing::debug!(
                        authenticated = next.identity().is_some(),
                        "identity state changed"
                    );
                }
            }
            tracing::debug!("identity provider closed its state channel");
        });

        Self {
            provider,
            snapshot,
            listener,
        }
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.snapshot.borrow().identity().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.borrow().identity().is_some()
    }

    pub fn loading(&self) -> bool {
        !self.snapshot.borrow().is_resolved()
    }

    /// The identity bound to `token`, if it belongs to the live session.
    pub fn authenticate(&self, token: &str) -> Option<Identity> {
        if self.snapshot.borrow().identity().is_none() {
            return None;
        }
        self.provider.authenticate(token)
    }

    /// Auth state as seen by a client presenting `token`.
    pub fn state_for(&self, token: Option<&str>) -> AuthStateDto {
        let loading = self.loading();
        let identity = token.and_then(|token| self.authenticate(token));
        AuthStateDto {
            is_authenticated: identity.is_some(),
            loading,
            current_identity: identity.map(IdentityDto::from),
        }
    }

    pub fn check_access(&self, guard: RouteGuard, token: Option<&str>) -> RouteAccess {
        if guard == RouteGuard::Public {
            return RouteAccess::Granted;
        }
        if !self.snapshot.borrow().is_resolved() {
            return RouteAccess::Pending;
        }
        match token.and_then(|token| self.authenticate(token)) {
            Some(_) => RouteAccess::Granted,
            None => RouteAccess::RedirectToLogin,
        }
    }

    pub async fn wait_until_resolved(&self) -> ApplicationResult<()> {
        self.wait_for(AuthState::is_resolved).await
    }

    pub async fn login(&self, email: &str, secret: &str) -> ApplicationResult<Session> {
        match self.provider.sign_in(email, secret).await {
            Ok(session) => {
                self.wait_for(|state| state.identity().is_some()).await?;
                tracing::info!("admin signed in");
                Ok(session)
            }
            Err(err) => Err(Self::map_login_error(&err)),
        }
    }

    pub async fn logout(&self) -> ApplicationResult<()> {
        if let Err(err) = self.provider.sign_out().await {
            tracing::error!(error = %err, "failed to log out");
            return Err(ApplicationError::infrastructure(err.message));
        }
        self.wait_for(|state| matches!(state, AuthState::SignedOut))
            .await?;
        tracing::info!("admin signed out");
        Ok(())
    }

    fn map_login_error(err: &ProviderError) -> ApplicationError {
        match LoginFailure::classify(&err.code) {
            LoginFailure::BadCredentials => {
                tracing::warn!(code = %err.code, "rejected login attempt");
                ApplicationError::unauthorized(INVALID_CREDENTIALS)
            }
            LoginFailure::Other => {
                tracing::error!(error = %err, "identity provider failed during login");
                ApplicationError::infrastructure(GENERIC_LOGIN_FAILURE)
            }
        }
    }

    async fn wait_for(&self, predicate: impl FnMut(&AuthState) -> bool) -> ApplicationResult<()> {
        let mut rx = self.snapshot.clone();
        rx.wait_for(predicate)
            .await
            .map(|_| ())
            .map_err(|_| ApplicationError::infrastructure("identity listener stopped"))
    }
}

impl Drop for IdentityGate {
    fn drop(&mut self) {
        self.listener.abort();
    }
}
