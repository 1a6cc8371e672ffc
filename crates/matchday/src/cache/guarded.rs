//! Fault-absorbing wrapper around a cache backend.
//!
//! The cache is an accelerator, never a source of truth. Every operation on
//! [`GuardedCache`] reports failure as "nothing cached" (reads) or as a
//! logged no-op (writes and deletes), so callers only ever see data that
//! came from the store or from a healthy cache.

use std::sync::Arc;
use std::time::Duration;

use matchday_core::cache::{
    deserialize_match, deserialize_matches, serialize_match, serialize_matches, Cache,
};
use matchday_core::matches::Match;

/// Cache handle that never surfaces an error.
pub struct GuardedCache<C: Cache> {
    inner: Arc<C>,
}

impl<C: Cache> Clone for GuardedCache<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Cache> GuardedCache<C> {
    pub fn new(inner: Arc<C>) -> Self {
        Self { inner }
    }

    /// Reads raw bytes. Any backend error reads as a miss.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        match self.inner.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    key = %key,
                    unavailable = e.is_unavailable(),
                    error = %e,
                    "Cache read failed"
                );
                None
            }
        }
    }

    /// Writes raw bytes with a TTL. Failures are logged and dropped.
    pub async fn set(&self, key: &str, value: &[u8], ttl: Duration) {
        if let Err(e) = self.inner.set(key, value, Some(ttl)).await {
            tracing::warn!(
                key = %key,
                unavailable = e.is_unavailable(),
                error = %e,
                "Cache write failed"
            );
        }
    }

    /// Deletes a key. Failures are logged and dropped.
    pub async fn delete(&self, key: &str) {
        if let Err(e) = self.inner.delete(key).await {
            tracing::warn!(
                key = %key,
                unavailable = e.is_unavailable(),
                error = %e,
                "Cache delete failed"
            );
        }
    }

    /// Reads a single match. Undecodable bytes count as a miss.
    pub async fn get_match(&self, key: &str) -> Option<Match> {
        let bytes = self.get(key).await?;
        match deserialize_match(&bytes) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding undecodable cached match");
                None
            }
        }
    }

    pub async fn set_match(&self, key: &str, record: &Match, ttl: Duration) {
        match serialize_match(record) {
            Ok(bytes) => self.set(key, &bytes, ttl).await,
            Err(e) => tracing::warn!(key = %key, error = %e, "Failed to serialize match"),
        }
    }

    /// Reads an ordered listing. Undecodable bytes count as a miss.
    pub async fn get_matches(&self, key: &str) -> Option<Vec<Match>> {
        let bytes = self.get(key).await?;
        match deserialize_matches(&bytes) {
            Ok(records) => Some(records),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding undecodable cached listing");
                None
            }
        }
    }

    pub async fn set_matches(&self, key: &str, records: &[Match], ttl: Duration) {
        match serialize_matches(records) {
            Ok(bytes) => self.set(key, &bytes, ttl).await,
            Err(e) => tracing::warn!(key = %key, error = %e, "Failed to serialize listing"),
        }
    }
}
