use std::{env, str::FromStr, time::Duration};

use crate::events::DEFAULT_CHANNEL_CAPACITY;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of in-memory cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Capacity of the match event channel (default: 100)
    pub event_channel_capacity: usize,
    /// Redis connection URL. Only used when the `redis` feature is enabled.
    pub redis_url: String,
    /// Referee availability, e.g. `"7,8:unavailable"` (default: empty)
    pub referee_roster: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `EVENT_CHANNEL_CAPACITY` - Event channel capacity (default: 100)
    /// - `REDIS_URL` - Redis connection URL. When unset it is built from
    ///   `REDIS_HOST` (default: "localhost"), `REDIS_PORT` (default: 6379)
    ///   and the optional `REDIS_PASSWORD`.
    /// - `REFEREE_ROSTER` - Comma separated referee ids, each optionally
    ///   suffixed with `:unavailable`
    ///
    /// Missing or unparsable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let redis_url = lookup("REDIS_URL").unwrap_or_else(|| {
            let host = lookup("REDIS_HOST").unwrap_or_else(|| "localhost".to_string());
            let port: u16 = parse_var(&lookup, "REDIS_PORT").unwrap_or(6379);
            match lookup("REDIS_PASSWORD").filter(|p| !p.is_empty()) {
                Some(password) => format!("redis://:{password}@{host}:{port}/0"),
                None => format!("redis://{host}:{port}/0"),
            }
        });

        Self {
            cache_ttl_seconds: parse_var(&lookup, "CACHE_TTL_SECONDS").unwrap_or(300),
            cache_max_entries: parse_var(&lookup, "CACHE_MAX_ENTRIES")
                .filter(|n: &usize| *n > 0)
                .unwrap_or(10_000),
            event_channel_capacity: parse_var(&lookup, "EVENT_CHANNEL_CAPACITY")
                .filter(|n: &usize| *n > 0)
                .unwrap_or(DEFAULT_CHANNEL_CAPACITY),
            redis_url,
            referee_roster: lookup("REFEREE_ROSTER").unwrap_or_default(),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    lookup(name).and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
