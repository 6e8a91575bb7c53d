// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::{ArticleSummaryDto, ArticleViewDto},
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

/// Public listing: featured articles first, then newest first.
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleSummaryDto>>> {
    state
        .blocking(|services| services.article_queries.list_summaries())
        .await
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleViewDto>> {
    state
        .blocking(move |services| {
            services
                .article_queries
                .get_article_view(GetArticleByIdQuery { id })
        })
        .await?
        .into_http()
        .map(Json)
}
