//! Startup seed data.
//!
//! A seed file registers referees and creates matches through the service,
//! so seeded matches go through the same validation, invalidation and event
//! publication as any other write.
//!
//! ```json
//! {
//!   "referees": [{"id": 7, "available": true}],
//!   "matches": [
//!     {"team_a": "A", "team_b": "B", "referee_id": 7,
//!      "scheduled_at": "2025-03-01T18:30:00Z", "location": "Main Stadium"}
//!   ]
//! }
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use matchday_core::matches::{NewMatch, RefereeId};

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedReferee {
    pub id: RefereeId,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub referees: Vec<SeedReferee>,
    #[serde(default)]
    pub matches: Vec<NewMatch>,
}

impl SeedFile {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid seed file")
    }

    /// Reads and parses a seed file from disk.
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        Self::from_json(&json)
    }
}

/// Applies a seed to the running state.
///
/// Referees are registered first. Matches rejected by the service are
/// logged and skipped. Returns the number of matches created.
pub async fn apply_seed(state: &AppState, seed: &SeedFile) -> usize {
    for referee in &seed.referees {
        state
            .referees
            .set_availability(referee.id, referee.available)
            .await;
    }

    let mut created = 0;
    for new in &seed.matches {
        match state.service.create_match(new.clone()).await {
            Ok(record) => {
                tracing::debug!(match_id = record.id, "Seeded match");
                created += 1;
            }
            Err(e) => {
                tracing::warn!(
                    team_a = %new.team_a,
                    team_b = %new.team_b,
                    error = %e,
                    "Skipping seeded match"
                );
            }
        }
    }

    tracing::info!(
        referees = seed.referees.len(),
        matches = created,
        skipped = seed.matches.len() - created,
        "Seed applied"
    );
    created
}
