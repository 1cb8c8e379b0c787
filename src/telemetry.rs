//! Tracing subscriber bootstrap.

use crate::config::LoggingConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "TASKBOARD_LOG";

/// Error returned when the global subscriber cannot be installed.
#[derive(Debug, Error)]
#[error("failed to initialise tracing subscriber: {0}")]
pub struct TelemetryError(String);

/// Installs a formatted `tracing` subscriber for the process.
///
/// The filter comes from `TASKBOARD_LOG` when set, otherwise from
/// [`LoggingConfig::filter`].
///
/// # Errors
///
/// Returns [`TelemetryError`] when a global subscriber is already set or the
/// filter directive cannot be parsed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| TelemetryError(error.to_string()))
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.filter)
            .map_err(|error| TelemetryError(error.to_string())),
    }
}
