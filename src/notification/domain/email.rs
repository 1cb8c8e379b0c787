//! Composed outgoing email.

use crate::account::domain::EmailAddress;

/// Message handed to a mail transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub plain_body: String,
    /// Optional HTML alternative.
    pub html_body: Option<String>,
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: EmailAddress,
}
