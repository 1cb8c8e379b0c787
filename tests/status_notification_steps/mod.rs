//! Step definitions for status-change notification scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
