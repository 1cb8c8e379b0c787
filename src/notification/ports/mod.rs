//! Port contracts consumed by the notifier.

pub mod cache;
pub mod mail;
pub mod template;

pub use cache::{CacheError, CacheResult, KeyValueCache};
pub use mail::{MailError, MailResult, MailTransport};
#[cfg(test)]
pub use mail::MockMailTransport;
pub use template::{TemplateError, TemplateRenderer};
