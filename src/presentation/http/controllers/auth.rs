use crate::application::dto::{AuthStateDto, SessionDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{AdminSession, SessionToken};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<SessionDto>> {
    let session = state
        .services
        .identity()
        .login(&payload.email, &payload.password)
        .await
        .into_http()?;
    Ok(Json(session.into()))
}

/// Only the holder of the live session may end it.
pub async fn logout(
    Extension(state): Extension<HttpState>,
    AdminSession(identity): AdminSession,
) -> HttpResult<StatusCode> {
    state.services.identity().logout().await.into_http()?;
    tracing::debug!(uid = %identity.uid, "session ended");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn auth_state(
    Extension(state): Extension<HttpState>,
    token: SessionToken,
) -> Json<AuthStateDto> {
    Json(state.services.identity().state_for(token.as_deref()))
}
