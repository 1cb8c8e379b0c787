//! Mail transports that do not leave the process.

use crate::notification::{
    domain::OutgoingEmail,
    ports::{MailError, MailResult, MailTransport},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Writes outgoing mail to the tracing log instead of delivering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMailTransport;

#[async_trait]
impl MailTransport for ConsoleMailTransport {
    async fn send(&self, email: &OutgoingEmail) -> MailResult<()> {
        info!(
            from = %email.from,
            to = %email.to,
            subject = %email.subject,
            has_html = email.html_body.is_some(),
            "email sent to console"
        );
        debug!(body = %email.plain_body, "email plain body");
        Ok(())
    }
}

/// Records outgoing mail for inspection, optionally rejecting everything.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOutbox {
    sent: Arc<RwLock<Vec<OutgoingEmail>>>,
    rejection: Option<String>,
}

impl InMemoryOutbox {
    /// Creates an outbox that accepts every message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an outbox that rejects every message with `reason`.
    #[must_use]
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            sent: Arc::default(),
            rejection: Some(reason.into()),
        }
    }

    /// Returns the accepted messages in send order.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Transport`] if the outbox lock is poisoned.
    pub fn sent(&self) -> MailResult<Vec<OutgoingEmail>> {
        self.sent
            .read()
            .map(|sent| sent.clone())
            .map_err(|err| MailError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl MailTransport for InMemoryOutbox {
    async fn send(&self, email: &OutgoingEmail) -> MailResult<()> {
        if let Some(reason) = &self.rejection {
            return Err(MailError::Rejected {
                recipient: email.to.to_string(),
                reason: reason.clone(),
            });
        }
        self.sent
            .write()
            .map_err(|err| MailError::transport(std::io::Error::other(err.to_string())))?
            .push(email.clone());
        Ok(())
    }
}
