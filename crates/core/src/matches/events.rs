use serde::{Deserialize, Serialize};

use super::types::MatchId;

/// State change announced to other services after a committed write.
///
/// Serializes as `{"type": "match_created", "match_id": 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    MatchCreated { match_id: MatchId },
    MatchUpdated { match_id: MatchId },
    MatchDeleted { match_id: MatchId },
}

impl MatchEvent {
    pub fn created(match_id: MatchId) -> Self {
        Self::MatchCreated { match_id }
    }

    pub fn updated(match_id: MatchId) -> Self {
        Self::MatchUpdated { match_id }
    }

    pub fn deleted(match_id: MatchId) -> Self {
        Self::MatchDeleted { match_id }
    }

    /// Returns the id of the match the event refers to.
    pub fn match_id(&self) -> MatchId {
        match self {
            MatchEvent::MatchCreated { match_id }
            | MatchEvent::MatchUpdated { match_id }
            | MatchEvent::MatchDeleted { match_id } => *match_id,
        }
    }

    /// Returns the event type tag.
    pub fn kind(&self) -> &'static str {
        match self {
            MatchEvent::MatchCreated { .. } => "match_created",
            MatchEvent::MatchUpdated { .. } => "match_updated",
            MatchEvent::MatchDeleted { .. } => "match_deleted",
        }
    }
}
