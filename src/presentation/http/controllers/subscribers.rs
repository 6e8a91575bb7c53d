// src/presentation/http/controllers/subscribers.rs
use crate::application::commands::subscribers::SubscribeCommand;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SubscribeRequest>,
) -> HttpResult<StatusCode> {
    let command = SubscribeCommand {
        email: payload.email,
    };
    state
        .blocking(move |services| services.subscriber_commands.subscribe(command))
        .await?
        .into_http()?;
    Ok(StatusCode::CREATED)
}
