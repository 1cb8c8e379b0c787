//! Task aggregate.

use super::{TaskDomainError, TaskId, TaskStatus, TaskTitle, WorkItem};
use crate::account::domain::UserId;
use crate::category::domain::CategoryId;
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Validated fields shared by new tasks and subtasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Title.
    pub title: TaskTitle,
    /// Free-form description, possibly empty.
    pub description: String,
    /// Initial status.
    pub status: TaskStatus,
    /// Optional deadline, which must lie in the future.
    pub deadline: Option<DateTime<Utc>>,
    /// Owning user.
    pub owner: Option<UserId>,
}

impl TaskDraft {
    /// Creates a draft with status `new`, no description, and no deadline.
    #[must_use]
    pub const fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: String::new(),
            status: TaskStatus::New,
            deadline: None,
            owner: None,
        }
    }
}

/// Rejects deadlines that are not strictly after the clock's current time.
///
/// # Errors
///
/// Returns [`TaskDomainError::DeadlineNotInFuture`] for past or present
/// deadlines.
pub fn ensure_future_deadline(
    deadline: DateTime<Utc>,
    clock: &impl Clock,
) -> Result<(), TaskDomainError> {
    if deadline <= clock.utc() {
        return Err(TaskDomainError::DeadlineNotInFuture { deadline });
    }
    Ok(())
}

/// Unit of work owned by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    deadline: Option<DateTime<Utc>>,
    owner: Option<UserId>,
    categories: Vec<CategoryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
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
    /// Persisted category references.
    pub categories: Vec<CategoryId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DeadlineNotInFuture`] when the draft's
    /// deadline is not after the current time.
    pub fn new(draft: TaskDraft, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        if let Some(deadline) = draft.deadline {
            ensure_future_deadline(deadline, clock)?;
        }
        let now = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            status: draft.status,
            deadline: draft.deadline,
            owner: draft.owner,
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            deadline: data.deadline,
            owner: data.owner,
            categories: data.categories,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
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

    /// Returns the categories the task is filed under.
    #[must_use]
    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
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
        self.touch(clock);
    }

    /// Replaces the description.
    pub fn describe(&mut self, description: impl Into<String>, clock: &impl Clock) {
        self.description = description.into();
        self.touch(clock);
    }

    /// Moves the task to `status`.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
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
        self.touch(clock);
        Ok(())
    }

    /// Replaces the category references, dropping duplicates.
    pub fn set_categories(
        &mut self,
        categories: impl IntoIterator<Item = CategoryId>,
        clock: &impl Clock,
    ) {
        let mut unique: Vec<CategoryId> = Vec::new();
        for category in categories {
            if !unique.contains(&category) {
                unique.push(category);
            }
        }
        self.categories = unique;
        self.touch(clock);
    }

    /// Drops a category reference without touching `updated_at`.
    ///
    /// Returns `true` when the task referenced the category.
    pub fn remove_category(&mut self, category: CategoryId) -> bool {
        let before = self.categories.len();
        self.categories.retain(|existing| *existing != category);
        self.categories.len() != before
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

impl WorkItem for Task {
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
