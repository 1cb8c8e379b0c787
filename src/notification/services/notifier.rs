//! Change-tracking notifier for task status transitions.
//!
//! The notifier brackets a task write. [`StatusChangeNotifier::before_write`]
//! records the persisted status under `task_previous_status_{id}`, and
//! [`StatusChangeNotifier::after_write`] consumes that entry, decides
//! whether the owner should hear about the change, and sends at most one
//! email per cooldown window. Nothing here fails the surrounding write:
//! cache, lookup, rendering, and delivery problems are logged and absorbed.

use crate::account::ports::UserRepository;
use crate::config::NotificationConfig;
use crate::notification::{
    domain::{
        NotificationOutcome, OutgoingEmail, STATUS_CHANGE_TEMPLATE, StatusChange, cooldown_key,
        previous_status_key,
    },
    ports::{KeyValueCache, MailTransport, TemplateRenderer},
};
use crate::task::domain::{Task, TaskId, TaskStatus};
use crate::task::ports::TaskRepository;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Sends an email to a task's owner when the task's status changes.
pub struct StatusChangeNotifier<U, K, M, T>
where
    U: UserRepository,
    K: KeyValueCache,
    M: MailTransport,
    T: TemplateRenderer,
{
    users: Arc<U>,
    cache: Arc<K>,
    mail: Arc<M>,
    templates: Arc<T>,
    config: NotificationConfig,
}

impl<U, K, M, T> Clone for StatusChangeNotifier<U, K, M, T>
where
    U: UserRepository,
    K: KeyValueCache,
    M: MailTransport,
    T: TemplateRenderer,
{
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            cache: Arc::clone(&self.cache),
            mail: Arc::clone(&self.mail),
            templates: Arc::clone(&self.templates),
            config: self.config.clone(),
        }
    }
}

impl<U, K, M, T> StatusChangeNotifier<U, K, M, T>
where
    U: UserRepository,
    K: KeyValueCache,
    M: MailTransport,
    T: TemplateRenderer,
{
    /// Creates a notifier.
    #[must_use]
    pub const fn new(
        users: Arc<U>,
        cache: Arc<K>,
        mail: Arc<M>,
        templates: Arc<T>,
        config: NotificationConfig,
    ) -> Self {
        Self {
            users,
            cache,
            mail,
            templates,
            config,
        }
    }

    /// Records the currently persisted status of `task` before a write.
    ///
    /// A task that does not exist yet, or cannot be looked up, is recorded
    /// as having no previous status.
    pub async fn before_write<R>(&self, tasks: &R, task: &Task)
    where
        R: TaskRepository + ?Sized,
    {
        let previous = match tasks.find_by_id(task.id()).await {
            Ok(found) => found.map(|persisted| persisted.status()),
            Err(err) => {
                warn!(task_id = %task.id(), error = %err, "previous status lookup failed");
                None
            }
        };

        let encoded = match serde_json::to_string(&previous) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(task_id = %task.id(), error = %err, "failed to encode previous status");
                return;
            }
        };
        let key = previous_status_key(task.id());
        match self
            .cache
            .set(&key, encoded, self.config.previous_status_ttl())
            .await
        {
            Ok(()) => {
                debug!(task_id = %task.id(), previous = ?previous, "captured previous status");
            }
            Err(err) => {
                warn!(task_id = %task.id(), error = %err, "failed to cache previous status");
            }
        }
    }

    /// Drops the captured status for a write that did not happen.
    pub async fn discard(&self, task_id: TaskId) {
        if let Err(err) = self.cache.delete(&previous_status_key(task_id)).await {
            warn!(%task_id, error = %err, "failed to discard previous status");
        }
    }

    /// Runs the post-write notification step for a committed write.
    pub async fn after_write(&self, task: &Task, was_created: bool) -> NotificationOutcome {
        let previous = self.take_previous_status(task.id()).await;
        if was_created {
            return NotificationOutcome::Created;
        }
        let Some(old_status) = previous else {
            return NotificationOutcome::NoPreviousStatus;
        };
        if old_status == task.status() {
            return NotificationOutcome::Unchanged;
        }

        let marker = cooldown_key(task.id());
        match self
            .cache
            .set_if_absent(&marker, "1".to_owned(), self.config.cooldown())
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                info!(task_id = %task.id(), "notification cooldown active, skipping");
                return NotificationOutcome::CooldownActive;
            }
            Err(err) => {
                error!(task_id = %task.id(), error = %err, "cooldown check failed");
                return NotificationOutcome::DeliveryFailed;
            }
        }

        self.notify_owner(task, old_status).await
    }

    async fn take_previous_status(&self, task_id: TaskId) -> Option<TaskStatus> {
        let key = previous_status_key(task_id);
        let cached = match self.cache.get(&key).await {
            Ok(cached) => cached,
            Err(err) => {
                warn!(%task_id, error = %err, "failed to read previous status");
                None
            }
        };
        if let Err(err) = self.cache.delete(&key).await {
            warn!(%task_id, error = %err, "failed to clear previous status");
        }

        cached.and_then(|encoded| {
            serde_json::from_str::<Option<TaskStatus>>(&encoded)
                .inspect_err(|err| {
                    warn!(%task_id, error = %err, "discarding unreadable previous status");
                })
                .ok()
                .flatten()
        })
    }

    async fn notify_owner(&self, task: &Task, old_status: TaskStatus) -> NotificationOutcome {
        let Some(owner_id) = task.owner() else {
            warn!(task_id = %task.id(), "task has no owner, notification skipped");
            return NotificationOutcome::MissingRecipient;
        };
        let owner = match self.users.find_by_id(owner_id).await {
            Ok(Some(owner)) => owner,
            Ok(None) => {
                warn!(task_id = %task.id(), %owner_id, "task owner not found, skipping");
                return NotificationOutcome::MissingRecipient;
            }
            Err(err) => {
                error!(task_id = %task.id(), error = %err, "owner lookup failed");
                return NotificationOutcome::DeliveryFailed;
            }
        };
        let Some(recipient) = owner.email().cloned() else {
            warn!(task_id = %task.id(), %owner_id, "task owner has no email, notification skipped");
            return NotificationOutcome::MissingRecipient;
        };

        let change = StatusChange {
            task_id: task.id(),
            task_title: task.title().as_str().to_owned(),
            old_status,
            new_status: task.status(),
            owner_name: owner.username().as_str().to_owned(),
            task_url: StatusChange::task_url(&self.config.task_url_base, task.id()),
        };
        let email = OutgoingEmail {
            subject: change.subject().to_owned(),
            plain_body: change.plain_body(),
            html_body: self.render_html(&change),
            from: self.config.from_address.clone(),
            to: recipient,
        };

        match self.mail.send(&email).await {
            Ok(()) => {
                info!(
                    task_id = %task.id(),
                    old_status = %old_status,
                    new_status = %task.status(),
                    to = %email.to,
                    "status change notification sent"
                );
                NotificationOutcome::Sent
            }
            Err(err) => {
                error!(task_id = %task.id(), error = %err, "status change delivery failed");
                NotificationOutcome::DeliveryFailed
            }
        }
    }

    fn render_html(&self, change: &StatusChange) -> Option<String> {
        let context = change
            .template_context()
            .inspect_err(|err| {
                warn!(task_id = %change.task_id, error = %err, "template context failed");
            })
            .ok()?;
        self.templates
            .render(STATUS_CHANGE_TEMPLATE, &context)
            .inspect_err(|err| {
                warn!(task_id = %change.task_id, error = %err, "html body rendering failed");
            })
            .ok()
    }
}
