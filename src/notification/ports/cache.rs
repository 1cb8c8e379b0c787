//! Ephemeral key-value cache port.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Shared cache with per-entry expiry.
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    /// Returns the live value stored under `key`.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`, replacing any existing entry.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()>;

    /// Removes `key`, returning `true` when a live entry was removed.
    async fn delete(&self, key: &str) -> CacheResult<bool>;

    /// Stores `value` only when no live entry exists under `key`.
    ///
    /// The check and the write are one atomic step. Returns `true` when the
    /// value was stored.
    async fn set_if_absent(&self, key: &str, value: String, ttl: Duration) -> CacheResult<bool>;
}

/// Errors returned by cache implementations.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    /// The cache backend failed.
    #[error("cache backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl CacheError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
