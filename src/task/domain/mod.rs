//! Domain model for tasks and subtasks.
//!
//! Status values, titles, and deadlines are validated on construction.
//! Listing behaviour (filters, search, ordering) and statistics are pure
//! functions over the aggregates so every adapter answers queries the same
//! way.

mod error;
mod filter;
mod ids;
mod statistics;
mod status;
mod subtask;
mod task;
mod title;

pub use error::{ParseTaskOrderingError, ParseTaskStatusError, TaskDomainError};
pub use filter::{TaskFilter, TaskOrdering, WorkItem};
pub use ids::{SubTaskId, TaskId};
pub use statistics::TaskStatistics;
pub use status::TaskStatus;
pub use subtask::{PersistedSubTaskData, SubTask};
pub use task::{PersistedTaskData, Task, TaskDraft, ensure_future_deadline};
pub use title::TaskTitle;
