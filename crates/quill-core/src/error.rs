//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("post with id {id} not found")]
    NotFound { id: u64 },

    #[error("invalid or missing fields: {}", .fields.join(", "))]
    Validation { fields: Vec<String> },
}

impl DomainError {
    /// Validation error naming a single field.
    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            fields: vec![field.into()],
        }
    }
}
