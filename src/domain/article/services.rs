use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::errors::DomainResult;

/// Domain service that derives ids for new articles from their title and
/// creation instant. Collisions are resolved by the repository.
pub struct ArticleIdService {
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleIdService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub fn derive(&self, title: &ArticleTitle, created_at: DateTime<Utc>) -> DomainResult<ArticleId> {
        let slug = self.generator.slugify(title.as_str());
        ArticleId::derive(&slug, created_at.timestamp_millis())
    }
}
