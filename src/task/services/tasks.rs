//! Service layer for tasks.
//!
//! Reads are open to everyone. Creating a task requires an authenticated
//! caller, who becomes its owner; changing or deleting it requires the
//! owner.

use super::{CreateTaskRequest, TaskServiceError, TaskServiceResult, UpdateTaskRequest};
use crate::access::{AccessError, AccessPolicy, Actor, Operation, ensure_owner_or_read_only};
use crate::account::domain::UserId;
use crate::category::{domain::CategoryId, ports::CategoryRepository};
use crate::pagination::{Page, PageRequest};
use crate::task::{
    domain::{Task, TaskFilter, TaskId, TaskStatistics, TaskTitle},
    ports::TaskRepository,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::info;

/// Task orchestration service.
#[derive(Clone)]
pub struct TaskService<R, G, C>
where
    R: TaskRepository,
    G: CategoryRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    categories: Arc<G>,
    clock: Arc<C>,
}

impl<R, G, C> TaskService<R, G, C>
where
    R: TaskRepository,
    G: CategoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, categories: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            repository,
            categories,
            clock,
        }
    }

    /// Creates a task owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Access`] for anonymous callers,
    /// [`TaskServiceError::Domain`] for an invalid title or a deadline that
    /// is not in the future, [`TaskServiceError::UnknownCategory`] when a
    /// category is missing or soft-deleted, or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        AccessPolicy::AuthenticatedOrReadOnly.check(actor, Operation::Write)?;
        let owner = require_user(actor)?;
        self.ensure_active_categories(request.categories()).await?;

        let categories = request.categories().to_vec();
        let draft = request.into_draft(owner)?;
        let mut task = Task::new(draft, &*self.clock)?;
        if !categories.is_empty() {
            task.set_categories(categories, &*self.clock);
        }
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), owner_id = %owner, "created task");
        Ok(task)
    }

    /// Applies a partial update to a task the caller owns.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// [`TaskServiceError::Access`] unless the caller owns it, or the
    /// validation errors described for [`TaskService::create`].
    pub async fn update(
        &self,
        actor: &Actor,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let mut task = self.load(id).await?;
        ensure_owner_or_read_only(actor, task.owner(), Operation::Write)?;

        if let Some(title) = request.title() {
            task.retitle(TaskTitle::new(title)?, &*self.clock);
        }
        if let Some(description) = request.description() {
            task.describe(description, &*self.clock);
        }
        if let Some(deadline) = request.deadline() {
            task.reschedule(deadline, &*self.clock)?;
        }
        if let Some(categories) = request.categories() {
            self.ensure_active_categories(categories).await?;
            task.set_categories(categories.iter().copied(), &*self.clock);
        }
        if let Some(status) = request.status() {
            task.set_status(status, &*self.clock);
        }

        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task the caller owns, together with its subtasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// [`TaskServiceError::Access`] unless the caller owns it.
    pub async fn delete(&self, actor: &Actor, id: TaskId) -> TaskServiceResult<()> {
        let task = self.load(id).await?;
        ensure_owner_or_read_only(actor, task.owner(), Operation::Write)?;
        self.repository.delete(id).await?;
        info!(task_id = %id, "deleted task");
        Ok(())
    }

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when lookup fails.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists tasks matching `filter`, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Pagination`] for a page past the end or
    /// [`TaskServiceError::Repository`] when lookup fails.
    pub async fn list(
        &self,
        filter: &TaskFilter,
        page: PageRequest,
    ) -> TaskServiceResult<Page<Task>> {
        let tasks = self.repository.list(filter).await?;
        Ok(Page::from_items(tasks, page)?)
    }

    /// Lists the caller's own tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Access`] for anonymous callers, otherwise
    /// as for [`TaskService::list`].
    pub async fn my_tasks(
        &self,
        actor: &Actor,
        filter: TaskFilter,
        page: PageRequest,
    ) -> TaskServiceResult<Page<Task>> {
        AccessPolicy::Authenticated.check(actor, Operation::Read)?;
        let owner = require_user(actor)?;
        self.list(&filter.with_owner(owner), page).await
    }

    /// Computes statistics over every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Access`] for anonymous callers or
    /// [`TaskServiceError::Repository`] when lookup fails.
    pub async fn statistics(&self, actor: &Actor) -> TaskServiceResult<TaskStatistics> {
        AccessPolicy::Authenticated.check(actor, Operation::Read)?;
        let tasks = self.repository.list(&TaskFilter::new()).await?;
        Ok(TaskStatistics::compute(&tasks, self.clock.utc()))
    }

    async fn load(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    async fn ensure_active_categories(&self, categories: &[CategoryId]) -> TaskServiceResult<()> {
        for category in categories {
            if self.categories.find_active(*category).await?.is_none() {
                return Err(TaskServiceError::UnknownCategory(*category));
            }
        }
        Ok(())
    }
}

pub(super) fn require_user(actor: &Actor) -> TaskServiceResult<UserId> {
    actor
        .user_id()
        .ok_or(TaskServiceError::Access(AccessError::Unauthenticated))
}
