// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by the blog model and its stores. Missing articles are
/// not errors here: repositories answer `None`.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A value broke an article or subscriber rule. The text is shown to the
    /// reader as is.
    #[error("{0}")]
    Validation(String),
    /// The email is already on the subscriber list.
    #[error("conflict: {0}")]
    Conflict(String),
    /// A stored entry exists but is not a valid article or subscriber.
    #[error("unreadable record: {0}")]
    Corrupt(String),
    #[error("storage error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// Whether the failure lies in stored data or the store itself rather
    /// than in what the caller asked for.
    pub fn is_storage_fault(&self) -> bool {
        matches!(self, Self::Corrupt(_) | Self::Persistence(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_text_is_displayed_verbatim() {
        let err = DomainError::Validation("title cannot be empty".into());
        assert_eq!(err.to_string(), "title cannot be empty");
        assert!(!err.is_storage_fault());
    }

    #[test]
    fn corrupt_records_and_store_failures_are_storage_faults() {
        assert!(DomainError::Corrupt("missing field `title`".into()).is_storage_fault());
        assert!(DomainError::Persistence("disk full".into()).is_storage_fault());
        assert!(!DomainError::Conflict("a@x.com".into()).is_storage_fault());
    }
}
