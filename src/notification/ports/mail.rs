//! Mail transport port.

use crate::notification::domain::OutgoingEmail;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for mail delivery.
pub type MailResult<T> = Result<T, MailError>;

/// Outbound email delivery.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Delivers one message.
    ///
    /// # Errors
    ///
    /// Returns [`MailError`] when the message could not be delivered.
    async fn send(&self, email: &OutgoingEmail) -> MailResult<()>;
}

/// Errors returned by mail transports.
#[derive(Debug, Clone, Error)]
pub enum MailError {
    /// The transport refused the message.
    #[error("message to {recipient} rejected: {reason}")]
    Rejected {
        /// Recipient address.
        recipient: String,
        /// Transport-supplied reason.
        reason: String,
    },
    /// The transport itself failed.
    #[error("mail transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl MailError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
