//! Result of the post-write notification step.

use std::fmt;

/// What the post-write step decided for one task write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationOutcome {
    /// The write created the task; creation is never announced.
    Created,
    /// No previous status was captured for the task.
    NoPreviousStatus,
    /// The status did not change.
    Unchanged,
    /// A notification for the task was sent within the cooldown window.
    CooldownActive,
    /// The owner is unknown or has no email address.
    MissingRecipient,
    /// The notification was handed to the mail transport.
    Sent,
    /// Composing or sending the notification failed.
    DeliveryFailed,
}

impl NotificationOutcome {
    /// Returns `true` when an email was sent.
    #[must_use]
    pub const fn is_sent(self) -> bool {
        matches!(self, Self::Sent)
    }
}

impl fmt::Display for NotificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::NoPreviousStatus => "no_previous_status",
            Self::Unchanged => "unchanged",
            Self::CooldownActive => "cooldown_active",
            Self::MissingRecipient => "missing_recipient",
            Self::Sent => "sent",
            Self::DeliveryFailed => "delivery_failed",
        })
    }
}
