// src/application/commands/articles/mod.rs
mod delete;
mod feature;
mod save;
mod service;

pub use delete::DeleteArticleCommand;
pub use feature::ToggleFeaturedCommand;
pub use save::{SaveArticleCommand, TITLE_AND_CONTENT_REQUIRED};
pub use service::ArticleCommandService;
