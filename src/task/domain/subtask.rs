//! Subtask aggregate.

use super::{
    SubTaskId, TaskDomainError, TaskDraft, TaskId, TaskStatus, TaskTitle, WorkItem,
    ensure_future_deadline,
};
use crate::account::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Step of a parent task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubTask {
    id: SubTaskId,
    task_id: TaskId,
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    deadline: Option<DateTime<Utc>>,
    owner: Option<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted subtask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSubTaskData {
    /// Persisted subtask identifier.
    pub id: SubTaskId,
    /// Persisted parent task.
    pub task_id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Persisted owner.
    pub owner: Option<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl SubTask {
    /// Creates a subtask under `task_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DeadlineNotInFuture`] when the draft's
    /// deadline is not after the current time.
    pub fn new(
        task_id: TaskId,
        draft: TaskDraft,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        if let Some(deadline) = draft.deadline {
            ensure_future_deadline(deadline, clock)?;
        }
        let now = clock.utc();
        Ok(Self {
            id: SubTaskId::new(),
            task_id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            deadline: draft.deadline,
            owner: draft.owner,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstructs a subtask from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedSubTaskData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            title: data.title,
            description: data.description,
            status: data.status,
            deadline: data.deadline,
            owner: data.owner,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the subtask identifier.
    #[must_use]
    pub const fn id(&self) -> SubTaskId {
        self.id
    }

    /// Returns the parent task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the owning user, if any.
    #[must_use]
    pub const fn owner(&self) -> Option<UserId> {
        self.owner
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the title.
    pub fn retitle(&mut self, title: TaskTitle, clock: &impl Clock) {
        self.title = title;
        self.updated_at = clock.utc();
    }

    /// Replaces the description.
    pub fn describe(&mut self, description: impl Into<String>, clock: &impl Clock) {
        self.description = description.into();
        self.updated_at = clock.utc();
    }

    /// Moves the subtask to `status`.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.updated_at = clock.utc();
    }

    /// Replaces or clears the deadline.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DeadlineNotInFuture`] when a new deadline
    /// is not after the current time.
    pub fn reschedule(
        &mut self,
        deadline: Option<DateTime<Utc>>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if let Some(value) = deadline {
            ensure_future_deadline(value, clock)?;
        }
        self.deadline = deadline;
        self.updated_at = clock.utc();
        Ok(())
    }
}

impl WorkItem for SubTask {
    fn title(&self) -> &TaskTitle {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn status(&self) -> TaskStatus {
        self.status
    }

    fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    fn owner(&self) -> Option<UserId> {
        self.owner
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
