use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_explicit_null, deserialize_optional_string};

/// Store-assigned identity of a match.
pub type MatchId = i64;

/// Identity of a referee, owned by the referee service.
pub type RefereeId = i64;

/// Lifecycle status of a match.
///
/// Transitions are not enforced: any status can be set by an update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Ongoing,
    Finished,
    Canceled,
}

impl MatchStatus {
    /// Returns the wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Ongoing => "ongoing",
            MatchStatus::Finished => "finished",
            MatchStatus::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sports fixture between two teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub team_a: String,
    pub team_b: String,
    pub referee_id: RefereeId,
    pub scheduled_at: DateTime<Utc>,
    pub location: Option<String>,
    pub status: MatchStatus,
    /// Free-form result payload, e.g. `{"score_a": 1, "score_b": 2}`.
    pub result: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    /// Builds the record a store persists for a create request.
    ///
    /// The status always starts as `scheduled` and both timestamps are `now`.
    pub fn from_new(id: MatchId, new: &NewMatch, now: DateTime<Utc>) -> Self {
        Self {
            id,
            team_a: new.team_a.clone(),
            team_b: new.team_b.clone(),
            referee_id: new.referee_id,
            scheduled_at: new.scheduled_at,
            location: new.location.clone(),
            status: MatchStatus::Scheduled,
            result: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Payload for creating a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMatch {
    pub team_a: String,
    pub team_b: String,
    pub referee_id: RefereeId,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
}

impl NewMatch {
    /// Creates a payload without a location.
    pub fn new(
        team_a: impl Into<String>,
        team_b: impl Into<String>,
        referee_id: RefereeId,
        scheduled_at: DateTime<Utc>,
    ) -> Self {
        Self {
            team_a: team_a.into(),
            team_b: team_b.into(),
            referee_id,
            scheduled_at,
            location: None,
        }
    }

    /// Sets the venue.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Partial update for a match. Only fields that are present are applied.
///
/// `location` and `result` are nullable, so they carry a second level of
/// `Option`: `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MatchPatch {
    #[serde(default)]
    pub team_a: Option<String>,
    #[serde(default)]
    pub team_b: Option<String>,
    #[serde(default)]
    pub referee_id: Option<RefereeId>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub location: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<MatchStatus>,
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub result: Option<Option<serde_json::Value>>,
}

impl MatchPatch {
    /// Sets the status.
    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Reassigns the referee.
    pub fn with_referee(mut self, referee_id: RefereeId) -> Self {
        self.referee_id = Some(referee_id);
        self
    }

    /// Sets the result payload.
    pub fn with_result(mut self, result: serde_json::Value) -> Self {
        self.result = Some(Some(result));
        self
    }

    /// Returns true if the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
