// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::domain::article::ArticleId;

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// Idempotent: unknown ids, malformed ids and storage failures all end
    /// up as a logged no-op.
    pub fn delete_article(&self, command: DeleteArticleCommand) {
        let Ok(id) = ArticleId::new(command.id) else {
            return;
        };

        match self.repo.delete(&id) {
            Ok(true) => tracing::info!(article_id = %id, "article deleted"),
            Ok(false) => tracing::debug!(article_id = %id, "delete of unknown article ignored"),
            Err(err) => tracing::error!(error = %err, article_id = %id, "failed to delete article"),
        }
    }
}
