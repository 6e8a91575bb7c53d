// tests/identity_gate_tests.rs
use std::sync::Arc;

use folio_core::application::{
    error::ApplicationError,
    identity::{GENERIC_LOGIN_FAILURE, INVALID_CREDENTIALS, IdentityGate, RouteAccess, RouteGuard},
    ports::identity::{AuthState, CODE_INVALID_CREDENTIAL, Identity, IdentityProvider},
};
use folio_core::infrastructure::storage::MemoryStore;

mod support;

use support::{
    ADMIN_EMAIL, ADMIN_PASSWORD, SCRIPTED_TOKEN, ScriptedProvider, SteppingClock, TestApp,
};

fn identity() -> Identity {
    Identity {
        uid: "uid-1".into(),
        email: ADMIN_EMAIL.into(),
    }
}

#[tokio::test]
async fn gate_is_loading_until_provider_resolves() {
    let provider = Arc::new(ScriptedProvider::new(CODE_INVALID_CREDENTIAL));
    let gate = IdentityGate::spawn(Arc::clone(&provider) as Arc<dyn IdentityProvider>);

    assert!(gate.loading());
    assert!(!gate.is_authenticated());
    assert_eq!(
        gate.check_access(RouteGuard::Protected, Some(SCRIPTED_TOKEN)),
        RouteAccess::Pending
    );
    assert_eq!(gate.check_access(RouteGuard::Public, None), RouteAccess::Granted);

    provider.set(AuthState::SignedOut);
    gate.wait_until_resolved().await.unwrap();
    assert!(!gate.loading());
    assert_eq!(
        gate.check_access(RouteGuard::Protected, Some(SCRIPTED_TOKEN)),
        RouteAccess::RedirectToLogin
    );
}

#[tokio::test]
async fn gate_mirrors_sign_in_from_the_provider() {
    let provider = Arc::new(ScriptedProvider::new(CODE_INVALID_CREDENTIAL));
    let gate = IdentityGate::spawn(Arc::clone(&provider) as Arc<dyn IdentityProvider>);

    provider.set(AuthState::SignedIn(identity()));
    gate.wait_until_resolved().await.unwrap();

    assert!(gate.is_authenticated());
    assert_eq!(gate.current_identity(), Some(identity()));
    assert_eq!(
        gate.check_access(RouteGuard::Protected, Some(SCRIPTED_TOKEN)),
        RouteAccess::Granted
    );

    let state = gate.state_for(Some(SCRIPTED_TOKEN));
    assert!(state.is_authenticated);
    assert!(!state.loading);
    assert_eq!(state.current_identity.unwrap().email, ADMIN_EMAIL);
}

#[tokio::test]
async fn a_signed_in_admin_does_not_grant_access_to_other_clients() {
    let provider = Arc::new(ScriptedProvider::new(CODE_INVALID_CREDENTIAL));
    let gate = IdentityGate::spawn(Arc::clone(&provider) as Arc<dyn IdentityProvider>);
    provider.set(AuthState::SignedIn(identity()));
    gate.wait_until_resolved().await.unwrap();

    for token in [None, Some(""), Some("someone-else")] {
        assert_eq!(
            gate.check_access(RouteGuard::Protected, token),
            RouteAccess::RedirectToLogin
        );
        let state = gate.state_for(token);
        assert!(!state.is_authenticated);
        assert_eq!(state.current_identity, None);
    }
}

#[tokio::test]
async fn credential_codes_map_to_invalid_credentials() {
    let app = TestApp::new().await;
    let gate = app.services.identity();

    let err = gate.login(ADMIN_EMAIL, "wrong").await.unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
    assert_eq!(err.user_message(), INVALID_CREDENTIALS);

    let err = gate.login("stranger@example.com", ADMIN_PASSWORD).await.unwrap_err();
    assert_eq!(err.user_message(), INVALID_CREDENTIALS);
    assert!(!gate.is_authenticated());
}

#[tokio::test]
async fn other_provider_failures_map_to_generic_message() {
    let provider = Arc::new(ScriptedProvider::new("auth/network-request-failed"));
    provider.set(AuthState::SignedOut);
    let gate = IdentityGate::spawn(provider as Arc<dyn IdentityProvider>);

    let err = gate.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Infrastructure(_)));
    assert_eq!(err.user_message(), GENERIC_LOGIN_FAILURE);
}

#[tokio::test]
async fn login_then_logout_round_trip() {
    let app = TestApp::new().await;
    let gate = app.services.identity();

    let session = gate.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
    assert_eq!(session.identity.email, ADMIN_EMAIL);
    assert!(gate.is_authenticated());
    assert_eq!(gate.current_identity(), Some(session.identity.clone()));
    assert_eq!(gate.authenticate(&session.token), Some(session.identity));

    gate.logout().await.unwrap();
    assert!(!gate.is_authenticated());
    assert_eq!(gate.current_identity(), None);
    assert_eq!(gate.authenticate(&session.token), None);
}

#[tokio::test]
async fn session_is_restored_after_restart() {
    let store = Arc::new(MemoryStore::new());

    let first = TestApp::with_store(store.clone(), Arc::new(SteppingClock::new())).await;
    let token = first.sign_in().await;
    let before = first.services.identity().current_identity();
    drop(first);

    let second = TestApp::unresolved(store, Arc::new(SteppingClock::new()));
    let gate = second.services.identity();
    assert!(gate.loading());

    second.provider.restore();
    gate.wait_until_resolved().await.unwrap();
    assert_eq!(gate.current_identity(), before);
    assert_eq!(gate.authenticate(&token), before);
}
