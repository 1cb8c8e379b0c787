//! Task categories with reversible deletion.
//!
//! Deleting a category marks it as soft-deleted by default, hiding it from
//! the active scope while keeping it restorable. Administrators may remove a
//! category permanently. The module follows hexagonal architecture:
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
