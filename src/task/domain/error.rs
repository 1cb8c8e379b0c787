//! Error types for task domain validation and parsing.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while constructing or changing task domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The title exceeds the 200-character storage limit.
    #[error("task title exceeds 200 character limit: {0}")]
    TitleTooLong(String),

    /// The deadline is not strictly after the current time.
    #[error("deadline {deadline} must be in the future")]
    DeadlineNotInFuture {
        /// Rejected deadline.
        deadline: DateTime<Utc>,
    },
}

/// Error returned while parsing task status values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing listing order values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task ordering: {0}")]
pub struct ParseTaskOrderingError(pub String);
