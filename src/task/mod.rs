//! Tasks and subtasks with filtering, statistics, and status tracking.
//!
//! Tasks belong to the user who created them and may be filed under any
//! number of active categories. Subtasks hang off a parent task and are
//! removed with it. The module follows hexagonal architecture:
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
