//! Request payloads for creating and updating tasks and subtasks.

use crate::account::domain::UserId;
use crate::category::domain::CategoryId;
use crate::task::domain::{TaskDomainError, TaskDraft, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};

/// Request payload for creating a task or subtask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    status: TaskStatus,
    deadline: Option<DateTime<Utc>>,
    categories: Vec<CategoryId>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: TaskStatus::default(),
            deadline: None,
            categories: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Files the task under categories. Ignored for subtasks.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CategoryId>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Returns the requested categories.
    #[must_use]
    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    /// Validates the request into a draft owned by `owner`.
    pub(crate) fn into_draft(self, owner: UserId) -> Result<TaskDraft, TaskDomainError> {
        Ok(TaskDraft {
            title: TaskTitle::new(self.title)?,
            description: self.description,
            status: self.status,
            deadline: self.deadline,
            owner: Some(owner),
        })
    }
}

/// Partial update for a task or subtask; unset fields stay unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    deadline: Option<Option<DateTime<Utc>>>,
    categories: Option<Vec<CategoryId>>,
}

impl UpdateTaskRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Moves to a new status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(Some(deadline));
        self
    }

    /// Clears the deadline.
    #[must_use]
    pub const fn without_deadline(mut self) -> Self {
        self.deadline = Some(None);
        self
    }

    /// Replaces the categories. Ignored for subtasks.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CategoryId>) -> Self {
        self.categories = Some(categories.into_iter().collect());
        self
    }

    pub(crate) fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub(crate) fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    pub(crate) const fn deadline(&self) -> Option<Option<DateTime<Utc>>> {
        self.deadline
    }

    pub(crate) fn categories(&self) -> Option<&[CategoryId]> {
        self.categories.as_deref()
    }
}
