//! Domain model for status-change notifications.

mod email;
mod keys;
mod outcome;
mod status_change;

pub use email::OutgoingEmail;
pub use keys::{cooldown_key, previous_status_key};
pub use outcome::NotificationOutcome;
pub use status_change::{CHANGED_SUBJECT, CLOSED_SUBJECT, STATUS_CHANGE_TEMPLATE, StatusChange};
