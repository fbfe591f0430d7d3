//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("element name is empty")]
    EmptyName,

    #[error("invalid element name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("internal tree operation failed: {0}")]
    Internal(String),
}
