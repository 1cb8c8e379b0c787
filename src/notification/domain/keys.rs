//! Cache keys used by the notifier.

use crate::task::domain::TaskId;

/// Key holding the status captured before a task write.
#[must_use]
pub fn previous_status_key(task_id: TaskId) -> String {
    format!("task_previous_status_{task_id}")
}

/// Key whose presence suppresses notifications for a task.
#[must_use]
pub fn cooldown_key(task_id: TaskId) -> String {
    format!("task_notification_cooldown_{task_id}")
}
