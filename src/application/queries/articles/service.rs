use std::sync::Arc;

use crate::application::ports::renderer::ContentRenderer;
use crate::domain::article::ArticleRepository;

pub struct ArticleQueryService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) renderer: Arc<dyn ContentRenderer>,
}

impl ArticleQueryService {
    pub fn new(repo: Arc<dyn ArticleRepository>, renderer: Arc<dyn ContentRenderer>) -> Self {
        Self { repo, renderer }
    }
}
