//! Aggregate task statistics.

use super::{Task, TaskStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Counts over a set of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStatistics {
    /// Number of tasks.
    pub total_tasks: usize,
    /// Number of tasks per status; every status is present.
    pub tasks_by_status: BTreeMap<TaskStatus, usize>,
    /// Unfinished tasks whose deadline has passed.
    pub overdue_tasks: usize,
}

impl TaskStatistics {
    /// Computes statistics as of `now`.
    #[must_use]
    pub fn compute<'a>(tasks: impl IntoIterator<Item = &'a Task>, now: DateTime<Utc>) -> Self {
        let mut tasks_by_status: BTreeMap<TaskStatus, usize> =
            TaskStatus::ALL.into_iter().map(|status| (status, 0)).collect();
        let mut total_tasks = 0;
        let mut overdue_tasks = 0;

        for task in tasks {
            total_tasks += 1;
            *tasks_by_status.entry(task.status()).or_default() += 1;
            let is_overdue = task.deadline().is_some_and(|deadline| deadline < now);
            if is_overdue && !task.status().is_done() {
                overdue_tasks += 1;
            }
        }

        Self {
            total_tasks,
            tasks_by_status,
            overdue_tasks,
        }
    }
}
