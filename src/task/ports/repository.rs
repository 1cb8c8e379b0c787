//! Repository ports for task and subtask persistence.

use crate::category::domain::CategoryId;
use crate::task::domain::{SubTask, SubTaskId, Task, TaskFilter, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task and subtask repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task with its category references.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task, including its categories.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Removes a task together with its subtasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns the tasks matching `filter`, in the filter's order.
    async fn list(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts the tasks filed under a category.
    async fn count_by_category(&self, category: CategoryId) -> TaskRepositoryResult<u64>;

    /// Removes a category reference from every task.
    ///
    /// Returns the number of tasks that referenced the category.
    async fn detach_category(&self, category: CategoryId) -> TaskRepositoryResult<u64>;
}

/// Subtask persistence contract.
#[async_trait]
pub trait SubTaskRepository: Send + Sync {
    /// Stores a new subtask.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the parent task does
    /// not exist or [`TaskRepositoryError::DuplicateSubTask`] when the
    /// subtask ID already exists.
    async fn store_subtask(&self, subtask: &SubTask) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing subtask.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::SubTaskNotFound`] when the subtask does
    /// not exist.
    async fn update_subtask(&self, subtask: &SubTask) -> TaskRepositoryResult<()>;

    /// Finds a subtask by identifier.
    async fn find_subtask(&self, id: SubTaskId) -> TaskRepositoryResult<Option<SubTask>>;

    /// Removes a subtask.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::SubTaskNotFound`] when the subtask does
    /// not exist.
    async fn delete_subtask(&self, id: SubTaskId) -> TaskRepositoryResult<()>;

    /// Returns the subtasks matching `filter`, optionally restricted to one
    /// parent task, in the filter's order.
    async fn list_subtasks(
        &self,
        task: Option<TaskId>,
        filter: &TaskFilter,
    ) -> TaskRepositoryResult<Vec<SubTask>>;
}

/// Errors returned by task and subtask repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A subtask with the same identifier already exists.
    #[error("duplicate subtask identifier: {0}")]
    DuplicateSubTask(SubTaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The subtask was not found.
    #[error("subtask not found: {0}")]
    SubTaskNotFound(SubTaskId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
