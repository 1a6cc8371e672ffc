mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{
    invalidation_keys, match_key, matches_key, DEFAULT_LISTING_KEY, MATCH_EVENTS_CHANNEL,
};
pub use serialization::{
    deserialize_match, deserialize_matches, serialize_match, serialize_matches,
    SerializationError,
};
pub use traits::{Cache, MatchPubSub};
