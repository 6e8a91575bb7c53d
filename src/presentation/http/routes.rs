// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{admin, articles, auth, editor, subscribers};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn api_routes() -> Router {
    Router::new()
        .route("/articles", get(articles::list_articles))
        .route("/articles/{id}", get(articles::get_article))
        .route("/subscribers", post(subscribers::subscribe))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/state", get(auth::auth_state))
        .nest("/admin", admin_routes())
}

/// Every handler here extracts `AdminSession`, which runs the identity gate.
fn admin_routes() -> Router {
    Router::new()
        .route(
            "/articles",
            get(admin::list_articles).post(admin::create_article),
        )
        .route(
            "/articles/{id}",
            get(admin::get_article)
                .put(admin::save_article)
                .delete(admin::delete_article),
        )
        .route("/articles/{id}/featured", post(admin::toggle_featured))
        .route("/subscribers", get(admin::list_subscribers))
        .route("/editor/preview", post(editor::preview))
        .route("/editor/replace", post(editor::replace))
        .route("/editor/format", post(editor::format))
        .route("/editor/attachments", post(editor::attach))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
