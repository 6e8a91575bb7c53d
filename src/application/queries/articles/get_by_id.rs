use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleViewDto, articles::display_date},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleId},
};

pub const ARTICLE_NOT_FOUND: &str = "Article not found.";

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub fn get_article_by_id(&self, query: GetArticleByIdQuery) -> ApplicationResult<ArticleDto> {
        self.find(query.id).map(Into::into)
    }

    /// Article plus its rendered body. Rendering always goes through the
    /// sanitizing renderer.
    pub fn get_article_view(&self, query: GetArticleByIdQuery) -> ApplicationResult<ArticleViewDto> {
        let article = self.find(query.id)?;
        let html = self.renderer.render(article.content.as_str());
        Ok(ArticleViewDto {
            display_date: display_date(&article.created_at),
            article: article.into(),
            html,
        })
    }

    fn find(&self, raw_id: String) -> ApplicationResult<Article> {
        let not_found = || ApplicationError::not_found(ARTICLE_NOT_FOUND);
        let id = ArticleId::new(raw_id).map_err(|_| not_found())?;

        match self.repo.find_by_id(&id) {
            Ok(found) => found.ok_or_else(not_found),
            Err(err) => {
                tracing::error!(error = %err, article_id = %id, "failed to read articles");
                Err(not_found())
            }
        }
    }
}
