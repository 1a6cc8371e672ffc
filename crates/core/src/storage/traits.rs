use async_trait::async_trait;

use crate::matches::{Match, MatchId, MatchPatch, NewMatch};

use super::{ListQuery, Result};

/// Source of truth for match records.
///
/// Implementations assign ids and timestamps. A missing record is reported
/// as `Ok(None)`, never as an error.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Persists a new match with status `scheduled` and returns it.
    async fn create_match(&self, new: &NewMatch) -> Result<Match>;

    /// Gets a match by its ID.
    async fn get_match(&self, id: MatchId) -> Result<Option<Match>>;

    /// Lists matches ordered by kick-off time.
    async fn list_matches(&self, query: &ListQuery) -> Result<Vec<Match>>;

    /// Applies the fields present in `patch` and refreshes `updated_at`.
    async fn update_match(&self, id: MatchId, patch: &MatchPatch) -> Result<Option<Match>>;

    /// Removes a match and returns the removed record.
    async fn delete_match(&self, id: MatchId) -> Result<Option<Match>>;
}
