use super::error::MatchError;
use super::types::{Match, MatchPatch, NewMatch};
use crate::storage::ListQuery;

/// Validates a match before creation.
pub fn validate_new_match(new: &NewMatch) -> Result<(), MatchError> {
    if new.team_a.trim().is_empty() {
        return Err(MatchError::EmptyTeam("team_a"));
    }
    if new.team_b.trim().is_empty() {
        return Err(MatchError::EmptyTeam("team_b"));
    }
    Ok(())
}

/// Validates the fields a patch sets. Absent fields are always valid.
pub fn validate_patch(patch: &MatchPatch) -> Result<(), MatchError> {
    if patch.team_a.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(MatchError::EmptyTeam("team_a"));
    }
    if patch.team_b.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(MatchError::EmptyTeam("team_b"));
    }
    Ok(())
}

/// Selects one page of matches for a listing query.
///
/// Filters by referee, orders by kick-off time (ties broken by id so pages
/// are stable), then applies `skip` and `limit`.
pub fn select_matches<'a>(
    matches: impl IntoIterator<Item = &'a Match>,
    query: &ListQuery,
) -> Vec<Match> {
    let mut selected: Vec<&Match> = matches
        .into_iter()
        .filter(|m| query.referee_id.is_none_or(|r| m.referee_id == r))
        .collect();

    selected.sort_by(|a, b| {
        a.scheduled_at
            .cmp(&b.scheduled_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    selected
        .into_iter()
        .skip(query.skip as usize)
        .take(query.limit as usize)
        .cloned()
        .collect()
}
