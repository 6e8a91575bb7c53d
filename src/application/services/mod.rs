// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, subscribers::SubscriberCommandService},
        editor::EditorService,
        identity::IdentityGate,
        ports::{renderer::ContentRenderer, time::Clock, util::SlugGenerator},
        queries::{articles::ArticleQueryService, subscribers::SubscriberQueryService},
    },
    domain::{
        article::{ArticleIdService, ArticleRepository},
        subscriber::SubscriberRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub subscriber_commands: Arc<SubscriberCommandService>,
    pub subscriber_queries: Arc<SubscriberQueryService>,
    pub editor: Arc<EditorService>,
    identity: Arc<IdentityGate>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        subscriber_repo: Arc<dyn SubscriberRepository>,
        renderer: Arc<dyn ContentRenderer>,
        identity: Arc<IdentityGate>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let id_service = Arc::new(ArticleIdService::new(Arc::clone(&slugger)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            id_service,
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_repo),
            Arc::clone(&renderer),
        ));

        let subscriber_commands = Arc::new(SubscriberCommandService::new(Arc::clone(
            &subscriber_repo,
        )));
        let subscriber_queries = Arc::new(SubscriberQueryService::new(subscriber_repo));

        let editor = Arc::new(EditorService::new(renderer));

        Self {
            article_commands,
            article_queries,
            subscriber_commands,
            subscriber_queries,
            editor,
            identity,
        }
    }

    pub fn identity(&self) -> Arc<IdentityGate> {
        Arc::clone(&self.identity)
    }
}
