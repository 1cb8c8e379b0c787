//! Status transition announced to a task owner.

use crate::task::domain::{TaskId, TaskStatus};
use serde::Serialize;

/// Subject for ordinary status changes.
pub const CHANGED_SUBJECT: &str = "Статус задачи изменён";

/// Subject when the task moves to `done`.
pub const CLOSED_SUBJECT: &str = "Задача закрыта!";

/// Template rendering the HTML body.
pub const STATUS_CHANGE_TEMPLATE: &str = "emails/task_status_change.html";

/// A detected status transition with everything the email needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    /// Task whose status changed.
    pub task_id: TaskId,
    /// Task title at the time of the change.
    pub task_title: String,
    /// Status before the write.
    pub old_status: TaskStatus,
    /// Status after the write.
    pub new_status: TaskStatus,
    /// Owner's username.
    pub owner_name: String,
    /// Link to the task.
    pub task_url: String,
}

#[derive(Serialize)]
struct TemplateContext<'a> {
    task_title: &'a str,
    old_status: &'a str,
    new_status: &'a str,
    owner_name: &'a str,
    task_url: &'a str,
    is_closing: bool,
}

impl StatusChange {
    /// Builds the task link from a base URL such as
    /// `http://localhost:8000/api/v1/tasks`.
    #[must_use]
    pub fn task_url(base: &str, task_id: TaskId) -> String {
        format!("{}/{task_id}/", base.trim_end_matches('/'))
    }

    /// Returns `true` when the task was closed.
    #[must_use]
    pub const fn is_closing(&self) -> bool {
        self.new_status.is_done()
    }

    /// Returns the subject line.
    #[must_use]
    pub const fn subject(&self) -> &'static str {
        if self.is_closing() {
            CLOSED_SUBJECT
        } else {
            CHANGED_SUBJECT
        }
    }

    /// Returns the plain-text body.
    #[must_use]
    pub fn plain_body(&self) -> String {
        let closing_line = if self.is_closing() {
            "Задача закрыта!"
        } else {
            "Продолжайте работу!"
        };
        format!(
            "Здравствуйте, {owner}!\n\n\
             Статус вашей задачи \"{title}\" был изменён.\n\n\
             Старый статус: {old}\n\
             Новый статус: {new}\n\n\
             {closing_line}\n\n\
             Ссылка на задачу: {url}\n",
            owner = self.owner_name,
            title = self.task_title,
            old = self.old_status,
            new = self.new_status,
            url = self.task_url,
        )
    }

    /// Returns the template context for the HTML body.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the context cannot be serialized.
    pub fn template_context(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(TemplateContext {
            task_title: &self.task_title,
            old_status: self.old_status.as_str(),
            new_status: self.new_status.as_str(),
            owner_name: &self.owner_name,
            task_url: &self.task_url,
            is_closing: self.is_closing(),
        })
    }
}
