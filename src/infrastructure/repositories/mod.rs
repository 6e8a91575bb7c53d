// src/infrastructure/repositories/mod.rs
mod articles;
mod error;
mod subscribers;

pub use articles::{ARTICLES_KEY, StoredArticleRepository};
pub use subscribers::{StoredSubscriberRepository, SUBSCRIBERS_KEY};
