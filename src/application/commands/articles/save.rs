// src/application/commands/articles/save.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleId, ArticleTitle, ArticleUpdate, NewArticle},
};
use chrono::{DateTime, Utc};

pub const TITLE_AND_CONTENT_REQUIRED: &str = "Title and content are required.";

/// Create-or-update request coming from the editor. An `id` that matches
/// nothing is treated the same as no id at all.
#[derive(Debug, Clone)]
pub struct SaveArticleCommand {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub is_featured: Option<bool>,
}

impl ArticleCommandService {
    pub fn save_article(&self, command: SaveArticleCommand) -> ApplicationResult<ArticleDto> {
        let SaveArticleCommand {
            id,
            title,
            content,
            is_featured,
        } = command;

        let content = ArticleContent::new(content);
        if title.trim().is_empty() || content.is_blank() {
            return Err(ApplicationError::validation(TITLE_AND_CONTENT_REQUIRED));
        }
        let title = ArticleTitle::new(title)?;
        let now = self.clock.now();

        if let Some(id) = id.and_then(|raw| ArticleId::new(raw).ok()) {
            let update = ArticleUpdate::new(id, now)
                .with_title(title.clone())
                .with_content(content.clone())
                .with_featured(is_featured);

            match self.repo.update(update) {
                Ok(Some(updated)) => {
                    tracing::info!(article_id = %updated.id, "article updated");
                    return Ok(updated.into());
                }
                Ok(None) => {
                    tracing::debug!("no article with supplied id; creating a new one");
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to update article; creating a new one");
                }
            }
        }

        self.create(title, content, is_featured.unwrap_or(false), now)
    }

    fn create(
        &self,
        title: ArticleTitle,
        content: ArticleContent,
        is_featured: bool,
        now: DateTime<Utc>,
    ) -> ApplicationResult<ArticleDto> {
        let new_article = NewArticle {
            id: self.id_service.derive(&title, now)?,
            title,
            content,
            is_featured,
            created_at: now,
        };

        match self.repo.insert(new_article.clone()) {
            Ok(created) => {
                tracing::info!(article_id = %created.id, "article created");
                Ok(created.into())
            }
            Err(err) => {
                // Storage failures never reach the editor; it gets the
                // record it asked for even though nothing was persisted.
                tracing::error!(error = %err, article_id = %new_article.id, "failed to persist new article");
                Ok(new_article.into_article().into())
            }
        }
    }
}
