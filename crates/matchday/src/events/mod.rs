//! Match event publication and consumption.
//!
//! Writes announce themselves on a single broadcast channel named after
//! `matchday_core::cache::MATCH_EVENTS_CHANNEL`. The listener is the
//! in-process stand-in for downstream subscribers.

mod listener;
mod memory;

pub use listener::spawn_event_logger;
pub use memory::{MemoryPubSub, DEFAULT_CHANNEL_CAPACITY};
