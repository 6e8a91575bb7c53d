use crate::application::dto::serde_time;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleRepository, ArticleTitle, ArticleUpdate,
    NewArticle, ordering::sort_for_listing, seed::seed_articles,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::storage::JsonStorage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Mutex;

use super::error::lock_poisoned;

pub const ARTICLES_KEY: &str = "blog-articles";

/// Article collection stored as one JSON array under [`ARTICLES_KEY`].
pub struct StoredArticleRepository {
    storage: JsonStorage,
    writer: Mutex<()>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticleRecord {
    id: String,
    title: String,
    content: String,
    #[serde(with = "serde_time")]
    created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    updated_at: DateTime<Utc>,
    #[serde(default)]
    is_featured: bool,
}

impl TryFrom<ArticleRecord> for Article {
    type Error = DomainError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(record.id)?,
            title: ArticleTitle::new(record.title)?,
            content: ArticleContent::new(record.content),
            is_featured: record.is_featured,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

/// Parse one stored entry, handing the raw value back on failure.
fn parse_entry(raw: Value) -> Result<Article, (Value, DomainError)> {
    let record = match ArticleRecord::deserialize(&raw) {
        Ok(record) => record,
        Err(err) => return Err((raw, DomainError::Corrupt(err.to_string()))),
    };
    Article::try_from(record).map_err(|err| (raw, err))
}

#[derive(Serialize)]
#[serde(untagged)]
enum StoredEntry<'a> {
    Record(ArticleRecord),
    Unreadable(&'a Value),
}

impl From<&Article> for ArticleRecord {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.as_str().to_string(),
            title: article.title.as_str().to_string(),
            content: article.content.as_str().to_string(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            is_featured: article.is_featured,
        }
    }
}

impl StoredArticleRepository {
    pub fn new(storage: JsonStorage) -> Self {
        Self {
            storage,
            writer: Mutex::new(()),
        }
    }

    /// Write the seed articles if the collection has never been stored.
    /// An existing empty array is left alone. Returns whether it seeded.
    pub fn seed_if_missing(&self) -> DomainResult<bool> {
        let _guard = self.writer.lock().map_err(|_| lock_poisoned("article"))?;
        if self.storage.contains(ARTICLES_KEY)? {
            return Ok(false);
        }
        self.store(&seed_articles()?, &[])?;
        tracing::info!("seeded article store");
        Ok(true)
    }

    /// Stored order, not listing order. Entries that do not parse are
    /// skipped here and returned separately so writes keep them.
    fn load(&self) -> DomainResult<(Vec<Article>, Vec<Value>)> {
        let raw: Vec<Value> = self.storage.read(ARTICLES_KEY)?.unwrap_or_default();
        let mut articles = Vec::with_capacity(raw.len());
        let mut unreadable = Vec::new();
        for entry in raw {
            match parse_entry(entry) {
                Ok(article) => articles.push(article),
                Err((entry, err)) => {
                    let id = entry.get("id").and_then(Value::as_str).unwrap_or_default();
                    tracing::warn!(error = %err, id, "skipping malformed stored article");
                    unreadable.push(entry);
                }
            }
        }
        Ok((articles, unreadable))
    }

    /// Unreadable entries are written back after the parsed ones.
    fn store(&self, articles: &[Article], unreadable: &[Value]) -> DomainResult<()> {
        let entries: Vec<StoredEntry<'_>> = articles
            .iter()
            .map(|article| StoredEntry::Record(ArticleRecord::from(article)))
            .chain(unreadable.iter().map(StoredEntry::Unreadable))
            .collect();
        self.storage.write(ARTICLES_KEY, &entries)?;
        Ok(())
    }

    /// Run a read-modify-write cycle under the writer lock.
    fn mutate<T>(&self, f: impl FnOnce(&mut Vec<Article>) -> (T, bool)) -> DomainResult<T> {
        let _guard = self.writer.lock().map_err(|_| lock_poisoned("article"))?;
        let (mut articles, unreadable) = self.load()?;
        let (result, dirty) = f(&mut articles);
        if dirty {
            self.store(&articles, &unreadable)?;
        }
        Ok(result)
    }
}

impl ArticleRepository for StoredArticleRepository {
    fn list(&self) -> DomainResult<Vec<Article>> {
        let (mut articles, _) = self.load()?;
        sort_for_listing(&mut articles);
        Ok(articles)
    }

    fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let (articles, _) = self.load()?;
        Ok(articles.into_iter().find(|article| &article.id == id))
    }

    fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.mutate(|articles| {
            let taken = |candidate: &ArticleId| articles.iter().any(|a| &a.id == candidate);
            let mut id = article.id.clone();
            let mut suffix = 2;
            while taken(&id) {
                id = article.id.with_suffix(suffix);
                suffix += 1;
            }

            let created = NewArticle { id, ..article }.into_article();
            articles.push(created.clone());
            (created, true)
        })
    }

    fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>> {
        self.mutate(|articles| {
            match articles.iter_mut().find(|a| a.id == update.id) {
                Some(existing) => {
                    existing.apply(update);
                    (Some(existing.clone()), true)
                }
                None => (None, false),
            }
        })
    }

    fn delete(&self, id: &ArticleId) -> DomainResult<bool> {
        self.mutate(|articles| {
            let before = articles.len();
            articles.retain(|a| &a.id != id);
            let removed = articles.len() != before;
            (removed, removed)
        })
    }

    fn toggle_featured(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        self.mutate(|articles| match articles.iter_mut().find(|a| &a.id == id) {
            Some(existing) => {
                existing.toggle_featured();
                (Some(existing.clone()), true)
            }
            None => (None, false),
        })
    }
}
