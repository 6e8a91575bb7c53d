// tests/support/mocks/identity.rs
use async_trait::async_trait;
use folio_core::application::ports::identity::{
    AuthState, Identity, IdentityProvider, ProviderError, Session,
};
use tokio::sync::watch;

/// Token accepted by [`ScriptedProvider`] while it reports a signed-in state.
pub const SCRIPTED_TOKEN: &str = "scripted-token";

/// Provider driven by the test: state is pushed with [`ScriptedProvider::set`]
/// and `sign_in` always fails with the configured code.
pub struct ScriptedProvider {
    state: watch::Sender<AuthState>,
    sign_in_error: String,
}

impl ScriptedProvider {
    pub fn new(sign_in_error: &str) -> Self {
        let (state, _) = watch::channel(AuthState::Unresolved);
        Self {
            state,
            sign_in_error: sign_in_error.to_string(),
        }
    }

    pub fn set(&self, next: AuthState) {
        self.state.send_replace(next);
    }
}

#[async_trait]
impl IdentityProvider for ScriptedProvider {
    async fn sign_in(&self, _email: &str, _secret: &str) -> Result<Session, ProviderError> {
        Err(ProviderError::new(self.sign_in_error.clone(), "scripted failure"))
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.state.send_replace(AuthState::SignedOut);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    fn authenticate(&self, token: &str) -> Option<Identity> {
        if token != SCRIPTED_TOKEN {
            return None;
        }
        self.state.borrow().identity().cloned()
    }
}
