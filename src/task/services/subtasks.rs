//! Service layer for subtasks.
//!
//! Every subtask operation requires an authenticated caller; changes and
//! deletions additionally require the subtask's owner.

use super::{
    CreateTaskRequest, TaskServiceError, TaskServiceResult, UpdateTaskRequest,
    tasks::require_user,
};
use crate::access::{AccessPolicy, Actor, Operation, ensure_owner_or_read_only};
use crate::pagination::{Page, PageRequest};
use crate::task::{
    domain::{SubTask, SubTaskId, TaskFilter, TaskId, TaskTitle},
    ports::{SubTaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::info;

/// Subtask orchestration service.
#[derive(Clone)]
pub struct SubTaskService<S, C>
where
    S: SubTaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> SubTaskService<S, C>
where
    S: SubTaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new subtask service.
    #[must_use]
    pub const fn new(repository: Arc<S>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a subtask under `task_id`, owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Access`] for anonymous callers,
    /// [`TaskServiceError::NotFound`] when the parent task does not exist,
    /// or [`TaskServiceError::Domain`] for invalid input.
    pub async fn create(
        &self,
        actor: &Actor,
        task_id: TaskId,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<SubTask> {
        AccessPolicy::Authenticated.check(actor, Operation::Write)?;
        let owner = require_user(actor)?;
        let subtask = SubTask::new(task_id, request.into_draft(owner)?, &*self.clock)?;

        self.repository
            .store_subtask(&subtask)
            .await
            .map_err(|err| match err {
                TaskRepositoryError::NotFound(missing) => TaskServiceError::NotFound(missing),
                other => TaskServiceError::Repository(other),
            })?;
        info!(subtask_id = %subtask.id(), %task_id, "created subtask");
        Ok(subtask)
    }

    /// Applies a partial update to a subtask the caller owns.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::SubTaskNotFound`] when the subtask does not
    /// exist, [`TaskServiceError::Access`] unless the caller owns it, or
    /// [`TaskServiceError::Domain`] for invalid input.
    pub async fn update(
        &self,
        actor: &Actor,
        id: SubTaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<SubTask> {
        AccessPolicy::Authenticated.check(actor, Operation::Write)?;
        let mut subtask = self.load(id).await?;
        ensure_owner_or_read_only(actor, subtask.owner(), Operation::Write)?;

        if let Some(title) = request.title() {
            subtask.retitle(TaskTitle::new(title)?, &*self.clock);
        }
        if let Some(description) = request.description() {
            subtask.describe(description, &*self.clock);
        }
        if let Some(deadline) = request.deadline() {
            subtask.reschedule(deadline, &*self.clock)?;
        }
        if let Some(status) = request.status() {
            subtask.set_status(status, &*self.clock);
        }

        self.repository.update_subtask(&subtask).await?;
        Ok(subtask)
    }

    /// Deletes a subtask the caller owns.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::SubTaskNotFound`] when the subtask does not
    /// exist or [`TaskServiceError::Access`] unless the caller owns it.
    pub async fn delete(&self, actor: &Actor, id: SubTaskId) -> TaskServiceResult<()> {
        AccessPolicy::Authenticated.check(actor, Operation::Write)?;
        let subtask = self.load(id).await?;
        ensure_owner_or_read_only(actor, subtask.owner(), Operation::Write)?;
        self.repository.delete_subtask(id).await?;
        Ok(())
    }

    /// Finds a subtask by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Access`] for anonymous callers or
    /// [`TaskServiceError::Repository`] when lookup fails.
    pub async fn get(&self, actor: &Actor, id: SubTaskId) -> TaskServiceResult<Option<SubTask>> {
        AccessPolicy::Authenticated.check(actor, Operation::Read)?;
        Ok(self.repository.find_subtask(id).await?)
    }

    /// Lists subtasks, optionally under one task, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Access`] for anonymous callers,
    /// [`TaskServiceError::Pagination`] for a page past the end, or
    /// [`TaskServiceError::Repository`] when lookup fails.
    pub async fn list(
        &self,
        actor: &Actor,
        task: Option<TaskId>,
        filter: &TaskFilter,
        page: PageRequest,
    ) -> TaskServiceResult<Page<SubTask>> {
        AccessPolicy::Authenticated.check(actor, Operation::Read)?;
        let subtasks = self.repository.list_subtasks(task, filter).await?;
        Ok(Page::from_items(subtasks, page)?)
    }

    async fn load(&self, id: SubTaskId) -> TaskServiceResult<SubTask> {
        self.repository
            .find_subtask(id)
            .await?
            .ok_or(TaskServiceError::SubTaskNotFound(id))
    }
}
