use crate::domain::errors::DomainError;

pub(super) fn lock_poisoned(what: &str) -> DomainError {
    DomainError::Persistence(format!("{what} writer lock poisoned"))
}
