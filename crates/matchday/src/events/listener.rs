//! Background consumer for match events.

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use matchday_core::cache::{MatchPubSub, Result, MATCH_EVENTS_CHANNEL};

/// Subscribes to match events and logs each one until shutdown.
///
/// The subscription is taken before the task is spawned, so no event
/// published after this returns can be missed. The task resolves to the
/// number of events it observed.
pub async fn spawn_event_logger<P>(
    pubsub: Arc<P>,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<JoinHandle<u64>>
where
    P: MatchPubSub + 'static,
{
    let mut receiver = pubsub.subscribe().await?;

    let handle = tokio::spawn(async move {
        let mut seen = 0u64;
        tracing::debug!(channel = MATCH_EVENTS_CHANNEL, "Event listener started");

        loop {
            tokio::select! {
                // Drain pending events before honoring shutdown
                biased;

                result = receiver.recv() => {
                    match result {
                        Ok(event) => {
                            seen += 1;
                            tracing::info!(
                                channel = MATCH_EVENTS_CHANNEL,
                                event = event.kind(),
                                match_id = event.match_id(),
                                "Match event"
                            );
                        }
                        Err(broadcast::error::RecvError::Lagged(n)) => {
                            tracing::warn!(channel = MATCH_EVENTS_CHANNEL, lagged = n, "Event listener lagged");
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            tracing::info!(channel = MATCH_EVENTS_CHANNEL, "Event channel closed");
                            break;
                        }
                    }
                }
                _ = shutdown_rx.recv() => {
                    tracing::debug!(channel = MATCH_EVENTS_CHANNEL, "Event listener shutting down");
                    break;
                }
            }
        }

        seen
    });

    Ok(handle)
}
