// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Merge an update into this article. `updated_at` never falls behind
    /// `created_at`, even if the caller's clock does.
    pub fn apply(&mut self, update: ArticleUpdate) {
        let ArticleUpdate {
            id: _,
            title,
            content,
            is_featured,
            updated_at,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(is_featured) = is_featured {
            self.is_featured = is_featured;
        }
        self.updated_at = updated_at.max(self.created_at);
    }

    pub fn toggle_featured(&mut self) {
        self.is_featured = !self.is_featured;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn into_article(self) -> Article {
        Article {
            id: self.id,
            title: self.title,
            content: self.content,
            is_featured: self.is_featured,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub is_featured: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            is_featured: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_featured(mut self, is_featured: Option<bool>) -> Self {
        self.is_featured = is_featured;
        self
    }
}
