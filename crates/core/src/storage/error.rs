use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// A missing record is not an error for reads, updates and deletes: those
/// return `Ok(None)`. `NotFound` exists for callers that need to turn that
/// outcome into an error at a boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Builds a `NotFound` error for a match id.
    pub fn match_not_found(id: i64) -> Self {
        RepositoryError::NotFound {
            entity_type: "Match",
            id: id.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
