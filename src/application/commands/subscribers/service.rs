use std::sync::Arc;

use crate::domain::subscriber::SubscriberRepository;

pub struct SubscriberCommandService {
    pub(super) repo: Arc<dyn SubscriberRepository>,
}

impl SubscriberCommandService {
    pub fn new(repo: Arc<dyn SubscriberRepository>) -> Self {
        Self { repo }
    }
}
