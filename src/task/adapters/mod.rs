//! Adapter implementations for task persistence.
//!
//! [`notifying`] decorates any task repository with the status-change
//! notifier.

pub mod memory;
pub mod notifying;
pub mod postgres;
