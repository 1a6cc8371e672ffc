use thiserror::Error;

/// Errors that can occur when validating match payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Team name cannot be empty: {0}")]
    EmptyTeam(&'static str),
}
