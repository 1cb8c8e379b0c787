//! Errors shared by the task and subtask services.

use crate::access::AccessError;
use crate::category::{domain::CategoryId, ports::CategoryRepositoryError};
use crate::pagination::PaginationError;
use crate::task::{
    domain::{SubTaskId, TaskDomainError, TaskId},
    ports::TaskRepositoryError,
};
use thiserror::Error;

/// Service-level errors for task and subtask operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Category lookup failed.
    #[error(transparent)]
    Categories(#[from] CategoryRepositoryError),
    /// The caller may not perform the operation.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// The requested page does not exist.
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The subtask does not exist.
    #[error("subtask not found: {0}")]
    SubTaskNotFound(SubTaskId),
    /// A referenced category does not exist or is soft-deleted.
    #[error("unknown category: {0}")]
    UnknownCategory(CategoryId),
}

/// Result type for task and subtask service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
