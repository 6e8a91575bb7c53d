use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;

/// Owner of the persisted article collection. Every read hands out a
/// snapshot; every mutation rewrites the whole collection.
pub trait ArticleRepository: Send + Sync {
    /// All articles in listing order (see [`super::ordering`]).
    fn list(&self) -> DomainResult<Vec<Article>>;

    fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;

    /// Store a new article. If `article.id` is taken, the repository picks
    /// the first free `-N` suffix and returns the stored record.
    fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Merge into an existing article. `Ok(None)` when the id is unknown.
    fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>>;

    /// Returns whether anything was removed.
    fn delete(&self, id: &ArticleId) -> DomainResult<bool>;

    /// `Ok(None)` when the id is unknown.
    fn toggle_featured(&self, id: &ArticleId) -> DomainResult<Option<Article>>;
}
