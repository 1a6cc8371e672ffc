use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::matches::MatchEvent;

use super::Result;

/// Trait for basic cache operations.
///
/// Implementations know nothing about what the bytes mean. Errors are
/// returned, not swallowed; callers decide how to degrade.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Trait for announcing match state changes to other services.
#[async_trait]
pub trait MatchPubSub: Send + Sync {
    /// Publishes a match event to subscribers.
    async fn publish(&self, event: &MatchEvent) -> Result<()>;

    /// Subscribes to match events.
    async fn subscribe(&self) -> Result<broadcast::Receiver<MatchEvent>>;
}
