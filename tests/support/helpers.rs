// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{
    Request, Response,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use folio_core::application::{
    identity::IdentityGate,
    ports::{identity::IdentityProvider, storage::KeyValueStore, time::Clock},
    services::ApplicationServices,
};
use folio_core::infrastructure::{
    rendering::SanitizingMarkdownRenderer,
    repositories::{StoredArticleRepository, StoredSubscriberRepository},
    security::identity::{AdminAccount, LocalIdentityProvider},
    storage::{JsonStorage, MemoryStore},
    util::DefaultSlugGenerator,
};
use folio_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

use super::mocks::{PlainPasswordHasher, SteppingClock};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct horse";

/// Fully wired application over an arbitrary store.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub provider: Arc<LocalIdentityProvider>,
    pub storage: JsonStorage,
}

impl TestApp {
    /// Memory store, stepping clock, identity resolved to signed out.
    pub async fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), Arc::new(SteppingClock::new())).await
    }

    pub async fn with_store(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let app = Self::unresolved(store, clock);
        app.provider.restore();
        app.services
            .identity()
            .wait_until_resolved()
            .await
            .expect("identity resolves");
        app
    }

    /// Like [`TestApp::with_store`] but the identity provider has not
    /// restored its session yet. Must run inside a tokio runtime.
    pub fn unresolved(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let storage = JsonStorage::new(store);
        let provider = Arc::new(LocalIdentityProvider::new(
            Some(AdminAccount {
                email: ADMIN_EMAIL.into(),
                password_hash: ADMIN_PASSWORD.into(),
            }),
            Arc::new(PlainPasswordHasher),
            storage.clone(),
        ));
        let gate = Arc::new(IdentityGate::spawn(
            Arc::clone(&provider) as Arc<dyn IdentityProvider>
        ));

        let services = Arc::new(ApplicationServices::new(
            Arc::new(StoredArticleRepository::new(storage.clone())),
            Arc::new(StoredSubscriberRepository::new(storage.clone())),
            Arc::new(SanitizingMarkdownRenderer),
            gate,
            clock,
            Arc::new(DefaultSlugGenerator),
        ));

        Self {
            services,
            provider,
            storage,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &["http://localhost:3000".to_string()])
    }

    /// Sign the admin in and return the bearer token for the session.
    pub async fn sign_in(&self) -> String {
        self.services
            .identity()
            .login(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("admin sign-in")
            .token
    }
}

pub fn get(uri: &str) -> Request<Body> {
    empty_request("GET", uri)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Attach `token` as an `Authorization: Bearer` header.
pub fn with_token(mut request: Request<Body>, token: &str) -> Request<Body> {
    let value = format!("Bearer {token}").parse().expect("header value");
    request.headers_mut().insert(AUTHORIZATION, value);
    request
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
