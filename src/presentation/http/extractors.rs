// src/presentation/http/extractors.rs
use crate::{
    application::{
        error::ApplicationError,
        identity::{RouteAccess, RouteGuard},
        ports::identity::Identity,
    },
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::FromRequestParts,
    http::{HeaderValue, StatusCode, header::RETRY_AFTER, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use std::convert::Infallible;

use super::error::HttpError;

pub const LOGIN_PATH: &str = "/login";

/// The signed-in admin. Extracting it runs the identity gate for the route
/// against the bearer token the client presented.
#[derive(Debug, Clone)]
pub struct AdminSession(pub Identity);

/// Bearer token from the `Authorization` header, if any. Never rejects.
#[derive(Debug, Clone)]
pub struct SessionToken(pub Option<String>);

impl SessionToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_string())
}

#[derive(Debug)]
pub enum GateRejection {
    /// Identity state is not resolved yet; the client should retry shortly.
    Pending,
    RedirectToLogin,
    Internal(HttpError),
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Pending => {
                let mut response = HttpError::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "identity state is still loading",
                )
                .into_response();
                response
                    .headers_mut()
                    .insert(RETRY_AFTER, HeaderValue::from_static("1"));
                response
            }
            Self::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
            Self::Internal(err) => err.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = GateRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                GateRejection::Internal(HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                )))
            })?;

        let token = bearer_token(parts);
        let gate = app_state.services.identity();
        match gate.check_access(RouteGuard::Protected, token.as_deref()) {
            RouteAccess::Pending => Err(GateRejection::Pending),
            RouteAccess::RedirectToLogin => Err(GateRejection::RedirectToLogin),
            // Signed out between the check and the read.
            RouteAccess::Granted => token
                .and_then(|token| gate.authenticate(&token))
                .map(Self)
                .ok_or(GateRejection::RedirectToLogin),
        }
    }
}

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(bearer_token(parts)))
    }
}
