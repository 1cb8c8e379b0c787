//! Status-change email notifications.
//!
//! [`services::StatusChangeNotifier`] runs around task writes: it captures
//! the persisted status before the write, compares it with the new status
//! afterwards, and emails the owner when the status changed. A per-task
//! cooldown drops repeated notifications. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
