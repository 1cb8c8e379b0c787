//! Task repository decorator that announces status changes.

use crate::account::ports::UserRepository;
use crate::category::domain::CategoryId;
use crate::notification::{
    ports::{KeyValueCache, MailTransport, TemplateRenderer},
    services::StatusChangeNotifier,
};
use crate::task::{
    domain::{Task, TaskFilter, TaskId},
    ports::{TaskRepository, TaskRepositoryResult},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Wraps a [`TaskRepository`] so every task write runs through the
/// status-change notifier.
///
/// Each write is bracketed explicitly: the previous status is captured,
/// the inner write runs, and then either the post-write step runs or, when
/// the write failed, the captured status is discarded. Reads pass straight
/// through.
pub struct NotifyingTaskRepository<R, U, K, M, T>
where
    R: TaskRepository,
    U: UserRepository,
    K: KeyValueCache,
    M: MailTransport,
    T: TemplateRenderer,
{
    inner: Arc<R>,
    notifier: StatusChangeNotifier<U, K, M, T>,
}

impl<R, U, K, M, T> NotifyingTaskRepository<R, U, K, M, T>
where
    R: TaskRepository,
    U: UserRepository,
    K: KeyValueCache,
    M: MailTransport,
    T: TemplateRenderer,
{
    /// Decorates `inner` with `notifier`.
    #[must_use]
    pub const fn new(inner: Arc<R>, notifier: StatusChangeNotifier<U, K, M, T>) -> Self {
        Self { inner, notifier }
    }

    async fn write_with_notification(
        &self,
        task: &Task,
        was_created: bool,
    ) -> TaskRepositoryResult<()> {
        self.notifier.before_write(self.inner.as_ref(), task).await;
        let written = if was_created {
            self.inner.store(task).await
        } else {
            self.inner.update(task).await
        };
        match written {
            Ok(()) => {
                let outcome = self.notifier.after_write(task, was_created).await;
                debug!(task_id = %task.id(), %outcome, "post-write notification step finished");
                Ok(())
            }
            Err(err) => {
                self.notifier.discard(task.id()).await;
                Err(err)
            }
        }
    }
}

#[async_trait]
impl<R, U, K, M, T> TaskRepository for NotifyingTaskRepository<R, U, K, M, T>
where
    R: TaskRepository,
    U: UserRepository,
    K: KeyValueCache,
    M: MailTransport,
    T: TemplateRenderer,
{
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.write_with_notification(task, true).await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.write_with_notification(task, false).await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.inner.find_by_id(id).await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.inner.delete(id).await
    }

    async fn list(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        self.inner.list(filter).await
    }

    async fn count_by_category(&self, category: CategoryId) -> TaskRepositoryResult<u64> {
        self.inner.count_by_category(category).await
    }

    async fn detach_category(&self, category: CategoryId) -> TaskRepositoryResult<u64> {
        self.inner.detach_category(category).await
    }
}
