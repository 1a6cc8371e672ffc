//! Application state.
//!
//! Every collaborator handle is constructed once here and shared by
//! reference counting. The cache backend is picked by feature flag.

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::events::{spawn_event_logger, MemoryPubSub};
use crate::referee::RefereeRoster;
use crate::service::MatchService;
use crate::storage::InMemoryMatchRepository;

#[cfg(feature = "memory")]
pub type ActiveCache = crate::cache::MemoryCache;

#[cfg(feature = "redis")]
pub type ActiveCache = crate::cache::RedisCache;

/// The match service as wired by [`AppState`].
pub type AppService =
    MatchService<InMemoryMatchRepository, ActiveCache, MemoryPubSub, RefereeRoster>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
    pub referees: Arc<RefereeRoster>,
    pub pubsub: Arc<MemoryPubSub>,
    /// Shutdown signal sender for background tasks.
    shutdown_tx: broadcast::Sender<()>,
    listener: Arc<Mutex<Option<JoinHandle<u64>>>>,
}

impl AppState {
    /// Creates the state around an already connected cache and starts the
    /// event listener.
    async fn build(config: &Config, cache: Arc<ActiveCache>) -> anyhow::Result<Self> {
        let referees = Arc::new(
            RefereeRoster::from_spec(&config.referee_roster)
                .context("Invalid REFEREE_ROSTER")?,
        );
        let repository = Arc::new(InMemoryMatchRepository::new());
        let pubsub = Arc::new(MemoryPubSub::new(config.event_channel_capacity));

        let service = MatchService::new(
            repository,
            cache,
            Arc::clone(&pubsub),
            Arc::clone(&referees),
            config.cache_ttl(),
        );

        let (shutdown_tx, _) = broadcast::channel(1);
        let listener = spawn_event_logger(Arc::clone(&pubsub), shutdown_tx.subscribe())
            .await
            .context("Failed to subscribe to match events")?;

        Ok(Self {
            service,
            referees,
            pubsub,
            shutdown_tx,
            listener: Arc::new(Mutex::new(Some(listener))),
        })
    }

    /// Subscribe to shutdown signal.
    pub fn subscribe_shutdown(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Signals background tasks to stop and waits for the event listener.
    ///
    /// Returns the number of events the listener observed. Calling this a
    /// second time returns 0.
    pub async fn shutdown(&self) -> u64 {
        let _ = self.shutdown_tx.send(());

        let Some(handle) = self.listener.lock().await.take() else {
            return 0;
        };

        match handle.await {
            Ok(seen) => {
                tracing::info!(events = seen, "Event listener stopped");
                seen
            }
            Err(e) => {
                tracing::error!(error = %e, "Event listener task failed");
                0
            }
        }
    }
}

#[cfg(feature = "memory")]
impl AppState {
    /// Creates AppState with the in-memory cache.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let cache = Arc::new(crate::cache::MemoryCache::new(config.cache_max_entries));
        tracing::info!(max_entries = config.cache_max_entries, "Using in-memory cache");
        Self::build(config, cache).await
    }
}

#[cfg(feature = "redis")]
impl AppState {
    /// Creates AppState with the Redis cache.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let cache = Arc::new(
            crate::cache::RedisCache::new(&config.redis_url)
                .await
                .context("Failed to connect to Redis")?,
        );
        tracing::info!("Using Redis cache");
        Self::build(config, cache).await
    }
}
