//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl DomainError {
    /// Check if this error is a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }

    /// Check if this error is a not-found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}

/// Errors reported by repository implementations
///
/// Repositories are ports; the backing store (in-memory, relational, ...)
/// lives in the infrastructure layer. `NotFound` is reserved for operations
/// that require the record to exist (`update`, `delete`); lookups signal
/// absence through `Option` instead.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
