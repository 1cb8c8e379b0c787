//! Application services for tasks and subtasks.

mod error;
mod requests;
mod subtasks;
mod tasks;

pub use error::{TaskServiceError, TaskServiceResult};
pub use requests::{CreateTaskRequest, UpdateTaskRequest};
pub use subtasks::SubTaskService;
pub use tasks::TaskService;
