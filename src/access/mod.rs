//! Authentication state and permission policies.
//!
//! Every service operation that mutates state receives an [`Actor`]
//! describing who is calling. Operations are classified as reads or writes
//! and checked against an [`AccessPolicy`]; ownership checks go through
//! [`ensure_owner_or_read_only`].

mod actor;
mod policy;

pub use actor::{Actor, Principal};
pub use policy::{AccessError, AccessPolicy, Operation, ensure_owner_or_read_only};
