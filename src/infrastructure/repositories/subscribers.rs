use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::subscriber::{SubscriberEmail, SubscriberRepository};
use crate::infrastructure::storage::JsonStorage;
use std::sync::Mutex;

use super::error::lock_poisoned;

pub const SUBSCRIBERS_KEY: &str = "blog-subscribers";

/// Subscriber emails stored as a JSON array of strings.
pub struct StoredSubscriberRepository {
    storage: JsonStorage,
    writer: Mutex<()>,
}

impl StoredSubscriberRepository {
    pub fn new(storage: JsonStorage) -> Self {
        Self {
            storage,
            writer: Mutex::new(()),
        }
    }

    fn load(&self) -> DomainResult<Vec<String>> {
        Ok(self.storage.read(SUBSCRIBERS_KEY)?.unwrap_or_default())
    }
}

impl SubscriberRepository for StoredSubscriberRepository {
    fn list(&self) -> DomainResult<Vec<SubscriberEmail>> {
        // A hand-edited or legacy entry must not hide the rest of the list.
        Ok(self
            .load()?
            .into_iter()
            .filter_map(|raw| match SubscriberEmail::parse(raw) {
                Ok(email) => Some(email),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping malformed stored subscriber");
                    None
                }
            })
            .collect())
    }

    fn add(&self, email: SubscriberEmail) -> DomainResult<()> {
        let _guard = self.writer.lock().map_err(|_| lock_poisoned("subscriber"))?;
        let mut emails = self.load()?;
        if emails.iter().any(|existing| existing == email.as_str()) {
            return Err(DomainError::Conflict(format!("{email} is already subscribed")));
        }
        emails.push(email.into());
        self.storage.write(SUBSCRIBERS_KEY, &emails)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStore;
    use std::sync::Arc;

    fn email(raw: &str) -> SubscriberEmail {
        SubscriberEmail::parse(raw).unwrap()
    }

    #[test]
    fn keeps_insertion_order_and_rejects_exact_duplicates() {
        let repo = StoredSubscriberRepository::new(JsonStorage::new(Arc::new(MemoryStore::new())));
        repo.add(email("b@x.com")).unwrap();
        repo.add(email("a@x.com")).unwrap();
        // Case-sensitive: a different spelling is a different subscriber.
        repo.add(email("A@x.com")).unwrap();

        assert!(matches!(
            repo.add(email("a@x.com")),
            Err(DomainError::Conflict(_))
        ));

        let listed: Vec<String> = repo.list().unwrap().into_iter().map(Into::into).collect();
        assert_eq!(listed, ["b@x.com", "a@x.com", "A@x.com"]);
    }
}
