use std::sync::Arc;

use crate::domain::subscriber::SubscriberRepository;

pub struct SubscriberQueryService {
    repo: Arc<dyn SubscriberRepository>,
}

impl SubscriberQueryService {
    pub fn new(repo: Arc<dyn SubscriberRepository>) -> Self {
        Self { repo }
    }

    /// Emails in the order they subscribed. Empty when the store cannot be
    /// read.
    pub fn list_subscribers(&self) -> Vec<String> {
        match self.repo.list() {
            Ok(emails) => emails.into_iter().map(Into::into).collect(),
            Err(err) => {
                tracing::error!(error = %err, "failed to read subscribers; returning empty list");
                Vec::new()
            }
        }
    }
}
