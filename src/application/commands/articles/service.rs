// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::article::{ArticleIdService, ArticleRepository},
};

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) id_service: Arc<ArticleIdService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        repo: Arc<dyn ArticleRepository>,
        id_service: Arc<ArticleIdService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            id_service,
            clock,
        }
    }
}
