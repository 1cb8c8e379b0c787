//! In-memory cache with clock-driven expiry.

use crate::notification::ports::{CacheError, CacheResult, KeyValueCache};
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Entry {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_none_or(|expiry| now < expiry)
    }
}

/// Process-local [`KeyValueCache`].
///
/// Expired entries are dropped lazily when their key is next touched.
pub struct InMemoryCache<C: Clock> {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
    clock: Arc<C>,
}

impl<C: Clock> Clone for InMemoryCache<C> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C: Clock> std::fmt::Debug for InMemoryCache<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCache").finish_non_exhaustive()
    }
}

impl<C: Clock + Send + Sync> InMemoryCache<C> {
    /// Creates an empty cache reading time from `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            clock,
        }
    }

    fn lock(&self) -> CacheResult<MutexGuard<'_, HashMap<String, Entry>>> {
        self.entries
            .lock()
            .map_err(|err| CacheError::backend(std::io::Error::other(err.to_string())))
    }

    fn entry(&self, value: String, ttl: Duration, now: DateTime<Utc>) -> Entry {
        let expires_at = TimeDelta::from_std(ttl)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta));
        Entry { value, expires_at }
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> KeyValueCache for InMemoryCache<C> {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let now = self.clock.utc();
        let mut entries = self.lock()?;
        match entries.get(key) {
            Some(entry) if entry.is_live(now) => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()> {
        let now = self.clock.utc();
        let entry = self.entry(value, ttl, now);
        self.lock()?.insert(key.to_owned(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<bool> {
        let now = self.clock.utc();
        let removed = self.lock()?.remove(key);
        Ok(removed.is_some_and(|entry| entry.is_live(now)))
    }

    async fn set_if_absent(&self, key: &str, value: String, ttl: Duration) -> CacheResult<bool> {
        let now = self.clock.utc();
        let mut entries = self.lock()?;
        if entries.get(key).is_some_and(|entry| entry.is_live(now)) {
            return Ok(false);
        }
        let entry = self.entry(value, ttl, now);
        entries.insert(key.to_owned(), entry);
        Ok(true)
    }
}
