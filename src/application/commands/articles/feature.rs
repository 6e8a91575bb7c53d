use super::ArticleCommandService;
use crate::{application::dto::ArticleDto, domain::article::ArticleId};

pub struct ToggleFeaturedCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// Flip the featured flag. `None` when there was nothing to flip.
    pub fn toggle_featured(&self, command: ToggleFeaturedCommand) -> Option<ArticleDto> {
        let id = ArticleId::new(command.id).ok()?;

        match self.repo.toggle_featured(&id) {
            Ok(Some(article)) => {
                tracing::info!(article_id = %id, featured = article.is_featured, "featured flag toggled");
                Some(article.into())
            }
            Ok(None) => None,
            Err(err) => {
                tracing::error!(error = %err, article_id = %id, "failed to toggle featured flag");
                None
            }
        }
    }
}
