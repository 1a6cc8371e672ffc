use thiserror::Error;

use matchday_core::matches::{MatchError, RefereeId};
use matchday_core::storage::{repository_error_to_status_code, RepositoryError};

/// Errors returned by [`MatchService`](super::MatchService) operations.
///
/// Cache and event failures never show up here; a missing match is `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Invalid(#[from] MatchError),
    #[error("Referee {0} is not available")]
    RefereeUnavailable(RefereeId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// HTTP status a boundary layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Invalid(_) | ServiceError::RefereeUnavailable(_) => 400,
            ServiceError::Repository(err) => repository_error_to_status_code(err),
        }
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
