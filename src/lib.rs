//! Taskboard: task tracking backend with status-change notifications.
//!
//! Users own tasks and subtasks, group tasks under shared categories, and
//! receive an email when one of their tasks changes status. Categories are
//! soft-deleted so they can be restored later.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, cache, mail)
//!
//! # Modules
//!
//! - [`account`]: User registration and login
//! - [`category`]: Category lifecycle with soft deletion
//! - [`task`]: Tasks, subtasks, filtering, and statistics
//! - [`notification`]: Status-change emails with cooldown
//! - [`app`]: Composition root wiring adapters into services

pub mod access;
pub mod account;
pub mod app;
pub mod category;
pub mod config;
pub mod notification;
pub mod pagination;
pub mod task;
pub mod telemetry;

#[cfg(test)]
mod test_support;
