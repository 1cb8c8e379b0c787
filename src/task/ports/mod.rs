//! Port contracts for task and subtask persistence.

pub mod repository;

pub use repository::{
    SubTaskRepository, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
};
