//! Field-by-field merge of partial updates.
//!
//! Part of the Functional Core: the caller supplies the clock so the
//! result is deterministic.

use chrono::{DateTime, Utc};

use super::types::{Match, MatchPatch};

/// Applies a patch to a stored match and returns the updated record.
///
/// Only fields present in the patch are changed. `id` and `created_at` are
/// never touched; `updated_at` is always set to `now`, even for an empty
/// patch. A result of JSON `null` is stored as `None`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use matchday_core::matches::{merge_match, Match, MatchPatch, MatchStatus, NewMatch};
///
/// let kickoff = Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap();
/// let stored = Match::from_new(1, &NewMatch::new("A", "B", 7, kickoff), kickoff);
/// let patch = MatchPatch::default().with_status(MatchStatus::Ongoing);
///
/// let merged = merge_match(&stored, &patch, Utc::now());
/// assert_eq!(merged.status, MatchStatus::Ongoing);
/// assert_eq!(merged.team_a, "A");
/// ```
pub fn merge_match(existing: &Match, patch: &MatchPatch, now: DateTime<Utc>) -> Match {
    let mut merged = existing.clone();

    if let Some(team_a) = &patch.team_a {
        merged.team_a = team_a.clone();
    }
    if let Some(team_b) = &patch.team_b {
        merged.team_b = team_b.clone();
    }
    if let Some(referee_id) = patch.referee_id {
        merged.referee_id = referee_id;
    }
    if let Some(scheduled_at) = patch.scheduled_at {
        merged.scheduled_at = scheduled_at;
    }
    if let Some(location) = &patch.location {
        merged.location = location.clone();
    }
    if let Some(status) = patch.status {
        merged.status = status;
    }
    if let Some(result) = &patch.result {
        // A JSON null result is stored as no result
        merged.result = result.clone().filter(|v| !v.is_null());
    }

    merged.updated_at = now;
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::{MatchStatus, NewMatch};
    use chrono::TimeZone;

    fn stored() -> Match {
        let kickoff = Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap();
        let created = Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap();
        Match::from_new(
            5,
            &NewMatch::new("Lions", "Tigers", 7, kickoff).with_location("North Field"),
            created,
        )
    }

    fn later() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 2, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_empty_patch_only_touches_updated_at() {
        let existing = stored();
        let merged = merge_match(&existing, &MatchPatch::default(), later());

        assert_eq!(merged.updated_at, later());
        assert_eq!(
            Match {
                updated_at: existing.updated_at,
                ..merged
            },
            existing
        );
    }

    #[test]
    fn test_identity_and_creation_time_preserved() {
        let existing = stored();
        let patch = MatchPatch {
            team_a: Some("Bears".to_string()),
            referee_id: Some(9),
            ..Default::default()
        };

        let merged = merge_match(&existing, &patch, later());

        assert_eq!(merged.id, existing.id);
        assert_eq!(merged.created_at, existing.created_at);
        assert_eq!(merged.team_a, "Bears");
        assert_eq!(merged.team_b, "Tigers");
        assert_eq!(merged.referee_id, 9);
    }

    #[test]
    fn test_result_and_status_applied() {
        let patch = MatchPatch::default()
            .with_status(MatchStatus::Finished)
            .with_result(serde_json::json!({"score_a": 2, "score_b": 1}));

        let merged = merge_match(&stored(), &patch, later());

        assert_eq!(merged.status, MatchStatus::Finished);
        assert_eq!(
            merged.result,
            Some(serde_json::json!({"score_a": 2, "score_b": 1}))
        );
    }

    #[test]
    fn test_explicit_null_clears_location() {
        let patch = MatchPatch {
            location: Some(None),
            ..Default::default()
        };

        let merged = merge_match(&stored(), &patch, later());

        assert!(merged.location.is_none());
    }

    #[test]
    fn test_missing_location_keeps_value() {
        let merged = merge_match(&stored(), &MatchPatch::default(), later());
        assert_eq!(merged.location.as_deref(), Some("North Field"));
    }

    #[test]
    fn test_json_null_result_is_stored_as_none() {
        let mut existing = stored();
        existing.result = Some(serde_json::json!({"score": [1, 0]}));

        let merged = merge_match(
            &existing,
            &MatchPatch::default().with_result(serde_json::Value::Null),
            later(),
        );

        assert_eq!(merged.result, None);
    }
}
