//! Pure functions for serializing/deserializing matches to/from cache bytes.
//!
//! Cache values are JSON with the same field set as the stored record, so a
//! cache hit is indistinguishable from a store read.

use crate::matches::Match;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a match to JSON bytes.
pub fn serialize_match(record: &Match) -> Result<Vec<u8>> {
    serde_json::to_vec(record).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a match.
pub fn deserialize_match(bytes: &[u8]) -> Result<Match> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes an ordered listing of matches to JSON bytes.
pub fn serialize_matches(records: &[Match]) -> Result<Vec<u8>> {
    serde_json::to_vec(records).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to an ordered listing of matches.
pub fn deserialize_matches(bytes: &[u8]) -> Result<Vec<Match>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
