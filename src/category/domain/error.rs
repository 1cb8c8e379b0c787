//! Error types for category domain validation and lifecycle transitions.

use super::CategoryId;
use thiserror::Error;

/// Errors returned while constructing or transitioning categories.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryDomainError {
    /// The category name is empty after trimming.
    #[error("category name must not be empty")]
    EmptyName,

    /// The category name exceeds the 100-character storage limit.
    #[error("category name exceeds 100 character limit: {0}")]
    NameTooLong(String),

    /// Restore was requested for a category that is not soft-deleted.
    #[error("category {0} is not deleted")]
    NotDeleted(CategoryId),
}
