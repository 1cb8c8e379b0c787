//! Individual configuration sections.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const fn default_cooldown_secs() -> u64 {
    30
}

const fn default_previous_status_ttl_secs() -> u64 {
    300
}

fn default_from_address() -> String {
    "noreply@taskmanager.com".to_owned()
}

fn default_task_url_base() -> String {
    "http://localhost:8000/api/v1/tasks".to_owned()
}

const fn default_page_size() -> usize {
    5
}

const fn default_max_page_size() -> usize {
    100
}

const fn default_cursor_page_size() -> usize {
    6
}

const fn default_pool_size() -> u32 {
    8
}

fn default_log_filter() -> String {
    "info".to_owned()
}

/// Status-change notification settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Seconds during which repeated notifications for a task are dropped.
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: u64,

    /// Seconds a captured previous status survives without being consumed.
    #[serde(default = "default_previous_status_ttl_secs")]
    pub previous_status_ttl_secs: u64,

    /// Sender address for notification mail.
    #[serde(default = "default_from_address")]
    pub from_address: String,

    /// Base URL used to build task links (`{base}/{id}/`).
    #[serde(default = "default_task_url_base")]
    pub task_url_base: String,
}

impl NotificationConfig {
    /// Returns the notification cooldown window.
    #[must_use]
    pub const fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    /// Returns the lifetime of a captured previous status.
    #[must_use]
    pub const fn previous_status_ttl(&self) -> Duration {
        Duration::from_secs(self.previous_status_ttl_secs)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: default_cooldown_secs(),
            previous_status_ttl_secs: default_previous_status_ttl_secs(),
            from_address: default_from_address(),
            task_url_base: default_task_url_base(),
        }
    }
}

/// Listing page-size settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the caller does not ask for one.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Upper bound applied to caller-requested page sizes.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Page size for cursor-paginated category listings.
    #[serde(default = "default_cursor_page_size")]
    pub cursor_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            cursor_page_size: default_cursor_page_size(),
        }
    }
}

/// `PostgreSQL` connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL; unset means no database is configured.
    #[serde(default)]
    pub url: Option<String>,

    /// Maximum pooled connections.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

impl DatabaseConfig {
    /// Returns `true` when a non-empty connection URL is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.trim().is_empty())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            pool_size: default_pool_size(),
        }
    }
}

/// Log filter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive used when `TASKBOARD_LOG` is
    /// unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
