//! In-memory pub/sub implementation.
//!
//! Provides a thread-safe pub/sub mechanism for match events using a
//! tokio broadcast channel.

use async_trait::async_trait;
use tokio::sync::broadcast;

use matchday_core::cache::{MatchPubSub, Result};
use matchday_core::matches::MatchEvent;

/// Channel capacity used when none is configured.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// In-memory pub/sub implementation.
///
/// All events go through one channel. Subscribers that fall more than
/// `capacity` events behind observe a lag instead of blocking publishers.
#[derive(Debug, Clone)]
pub struct MemoryPubSub {
    sender: broadcast::Sender<MatchEvent>,
}

impl MemoryPubSub {
    /// Creates a pub/sub with the given channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for MemoryPubSub {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

#[async_trait]
impl MatchPubSub for MemoryPubSub {
    async fn publish(&self, event: &MatchEvent) -> Result<()> {
        // No subscribers is not a failure; the event is simply dropped.
        let _ = self.sender.send(*event);
        Ok(())
    }

    async fn subscribe(&self) -> Result<broadcast::Receiver<MatchEvent>> {
        Ok(self.sender.subscribe())
    }
}
