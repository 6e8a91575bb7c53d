// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::articles::{DeleteArticleCommand, SaveArticleCommand, ToggleFeaturedCommand},
    dto::ArticleDto,
    queries::articles::{ARTICLE_NOT_FOUND, GetArticleByIdQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminSession;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveArticleRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub is_featured: Option<bool>,
}

impl SaveArticleRequest {
    fn into_command(self, id: Option<String>) -> SaveArticleCommand {
        SaveArticleCommand {
            id,
            title: self.title,
            content: self.content,
            is_featured: self.is_featured,
        }
    }
}

/// Dashboard listing with full Markdown content.
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    _admin: AdminSession,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .blocking(|services| services.article_queries.list_articles())
        .await
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .blocking(move |services| {
            services
                .article_queries
                .get_article_by_id(GetArticleByIdQuery { id })
        })
        .await?
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    _admin: AdminSession,
    Json(payload): Json<SaveArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = payload.into_command(None);
    let article = state
        .blocking(move |services| services.article_commands.save_article(command))
        .await?
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// Saves under `id`. An unknown id creates a new article with a fresh id.
pub async fn save_article(
    Extension(state): Extension<HttpState>,
    _admin: AdminSession,
    Path(id): Path<String>,
    Json(payload): Json<SaveArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = payload.into_command(Some(id));
    state
        .blocking(move |services| services.article_commands.save_article(command))
        .await?
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .blocking(move |services| {
            services
                .article_commands
                .delete_article(DeleteArticleCommand { id });
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_featured(
    Extension(state): Extension<HttpState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .blocking(move |services| {
            services
                .article_commands
                .toggle_featured(ToggleFeaturedCommand { id })
        })
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::new(StatusCode::NOT_FOUND, ARTICLE_NOT_FOUND))
}

pub async fn list_subscribers(
    Extension(state): Extension<HttpState>,
    _admin: AdminSession,
) -> HttpResult<Json<Vec<String>>> {
    state
        .blocking(|services| services.subscriber_queries.list_subscribers())
        .await
        .map(Json)
}
