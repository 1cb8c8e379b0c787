//! `PostgreSQL` adapters for task and subtask persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskRepository, TaskPgPool};
