use super::ArticleQueryService;
use crate::{
    application::dto::{ArticleDto, ArticleSummaryDto},
    domain::article::Article,
};

impl ArticleQueryService {
    /// Full records in listing order, as the admin dashboard shows them.
    pub fn list_articles(&self) -> Vec<ArticleDto> {
        self.load().into_iter().map(Into::into).collect()
    }

    /// Cards for the public article list.
    pub fn list_summaries(&self) -> Vec<ArticleSummaryDto> {
        self.load().into_iter().map(Into::into).collect()
    }

    // An unreadable store looks exactly like an empty one from here on.
    fn load(&self) -> Vec<Article> {
        self.repo.list().unwrap_or_else(|err| {
            tracing::error!(error = %err, "failed to read articles; returning empty list");
            Vec::new()
        })
    }
}
