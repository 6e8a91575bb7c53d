use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Public identifier of an article. Doubles as the URL segment, so it may
/// not contain whitespace or path separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("article id cannot be empty".into()));
        }
        if value.chars().any(|c| c.is_whitespace() || c == '/' || c == '?' || c == '#') {
            return Err(DomainError::Validation(format!(
                "article id `{value}` is not url-safe"
            )));
        }
        Ok(Self(value))
    }

    /// Derive the id for a freshly created article: `{slug}-{epoch millis}`.
    pub fn derive(slug: &str, created_at_millis: i64) -> DomainResult<Self> {
        let base = if slug.is_empty() { "article" } else { slug };
        Self::new(format!("{base}-{created_at_millis}"))
    }

    /// Disambiguated variant used when the derived id is already taken.
    pub fn with_suffix(&self, n: u32) -> Self {
        Self(format!("{}-{n}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleId> for String {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

/// Markdown source of an article. Stored verbatim; rendering and
/// sanitization happen on the way out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleContent> for String {
    fn from(value: ArticleContent) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_rejects_whitespace_and_separators() {
        assert!(ArticleId::new("").is_err());
        assert!(ArticleId::new("two words").is_err());
        assert!(ArticleId::new("a/b").is_err());
        assert!(ArticleId::new("welcome-to-my-blog").is_ok());
    }

    #[test]
    fn derive_falls_back_when_slug_is_empty() {
        let id = ArticleId::derive("", 1_700_000_000_000).unwrap();
        assert_eq!(id.as_str(), "article-1700000000000");

        let id = ArticleId::derive("hello-world", 42).unwrap();
        assert_eq!(id.as_str(), "hello-world-42");
        assert_eq!(id.with_suffix(2).as_str(), "hello-world-42-2");
    }

    #[test]
    fn title_must_not_be_blank() {
        assert!(ArticleTitle::new("   ").is_err());
        assert_eq!(ArticleTitle::new("Rust").unwrap().as_str(), "Rust");
    }
}
