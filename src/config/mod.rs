//! Layered configuration loading.
//!
//! Configuration sources, lowest to highest priority:
//!
//! 1. Built-in defaults
//! 2. `taskboard.toml` in the working directory
//! 3. Environment variables with the `TASKBOARD_` prefix, where `__`
//!    separates nested sections (`TASKBOARD_NOTIFICATION__COOLDOWN_SECS`
//!    maps to `notification.cooldown_secs`)

mod error;
mod sections;

pub use error::ConfigError;
pub use sections::{DatabaseConfig, LoggingConfig, NotificationConfig, PaginationConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "taskboard.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Status-change notification settings.
    #[serde(default)]
    pub notification: NotificationConfig,
    /// Listing page-size settings.
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// `PostgreSQL` connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Log filter settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration from defaults, `taskboard.toml`, and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when the merged values are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extracts and validates configuration from a prepared provider chain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the provider chain used by [`AppConfig::load`].
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let local_path = Path::new(CONFIG_FILE_NAME);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Checks cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notification.cooldown_secs == 0 {
            return Err(ConfigError::invalid(
                "notification.cooldown_secs",
                "must be greater than zero",
            ));
        }
        if self.notification.previous_status_ttl_secs == 0 {
            return Err(ConfigError::invalid(
                "notification.previous_status_ttl_secs",
                "must be greater than zero",
            ));
        }
        if self.database.pool_size == 0 {
            return Err(ConfigError::invalid(
                "database.pool_size",
                "must be greater than zero",
            ));
        }
        if self.notification.from_address.trim().is_empty() {
            return Err(ConfigError::invalid(
                "notification.from_address",
                "must not be empty",
            ));
        }
        let pagination = &self.pagination;
        if pagination.default_page_size == 0 || pagination.cursor_page_size == 0 {
            return Err(ConfigError::invalid(
                "pagination",
                "page sizes must be greater than zero",
            ));
        }
        if pagination.default_page_size > pagination.max_page_size {
            return Err(ConfigError::invalid(
                "pagination.default_page_size",
                "must not exceed pagination.max_page_size",
            ));
        }
        Ok(())
    }
}
