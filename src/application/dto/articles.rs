use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

const SNIPPET_WORDS: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub is_featured: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into_inner(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            is_featured: article.is_featured,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Card shown in the article list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryDto {
    pub id: String,
    pub title: String,
    pub snippet: String,
    pub display_date: String,
    pub is_featured: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleSummaryDto {
    fn from(article: Article) -> Self {
        Self {
            snippet: snippet(article.content.as_str()),
            display_date: display_date(&article.created_at),
            id: article.id.into_inner(),
            title: article.title.into_inner(),
            is_featured: article.is_featured,
            created_at: article.created_at,
        }
    }
}

/// Article detail with its sanitized HTML body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleViewDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub display_date: String,
    pub html: String,
}

/// First thirty words of the Markdown source followed by an ellipsis.
pub fn snippet(content: &str) -> String {
    let words: Vec<&str> = content.split_whitespace().take(SNIPPET_WORDS).collect();
    format!("{}...", words.join(" "))
}

/// `November 5, 2023`
pub fn display_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}
