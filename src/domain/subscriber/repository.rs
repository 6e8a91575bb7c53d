use crate::domain::errors::DomainResult;
use crate::domain::subscriber::value_objects::SubscriberEmail;

/// Append-only list of newsletter subscribers.
pub trait SubscriberRepository: Send + Sync {
    /// Emails in insertion order.
    fn list(&self) -> DomainResult<Vec<SubscriberEmail>>;

    /// Append `email`. Fails with [`DomainError::Conflict`] when the exact
    /// same string is already stored.
    ///
    /// [`DomainError::Conflict`]: crate::domain::errors::DomainError::Conflict
    fn add(&self, email: SubscriberEmail) -> DomainResult<()>;
}
