//! Serde helper functions for request payload deserialization.
//!
//! Partial updates need to tell a missing field apart from an explicit
//! `null`, and free-text fields treat blank strings as absent.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize a nullable field of a partial update.
///
/// Use together with `#[serde(default)]`:
/// - field missing -> `None` (leave untouched)
/// - field is `null` -> `Some(None)` (clear)
/// - field has a value -> `Some(Some(value))` (set)
pub fn deserialize_explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
