//! In-process referee availability table.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use matchday_core::matches::RefereeId;
use matchday_core::referee::RefereeDirectory;

/// Errors raised while parsing a roster description.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterParseError {
    #[error("Invalid referee id: {0}")]
    InvalidId(String),
    #[error("Unknown availability '{flag}' for referee {id}")]
    InvalidFlag { id: RefereeId, flag: String },
}

/// Availability table keyed by referee id.
///
/// Referees that were never registered are reported as unavailable.
#[derive(Debug, Clone, Default)]
pub struct RefereeRoster {
    referees: Arc<RwLock<HashMap<RefereeId, bool>>>,
}

impl RefereeRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma separated roster such as `"7,8:unavailable,9:available"`.
    ///
    /// An entry without a flag is available. Blank entries are skipped.
    pub fn from_spec(spec: &str) -> Result<Self, RosterParseError> {
        let mut referees = HashMap::new();

        for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (id_part, flag) = match entry.split_once(':') {
                Some((id, flag)) => (id.trim(), Some(flag.trim())),
                None => (entry, None),
            };

            let id: RefereeId = id_part
                .parse()
                .map_err(|_| RosterParseError::InvalidId(id_part.to_string()))?;

            let available = match flag {
                None | Some("available") => true,
                Some("unavailable") => false,
                Some(other) => {
                    return Err(RosterParseError::InvalidFlag {
                        id,
                        flag: other.to_string(),
                    })
                }
            };

            referees.insert(id, available);
        }

        Ok(Self {
            referees: Arc::new(RwLock::new(referees)),
        })
    }

    /// Registers a referee or changes their availability.
    pub async fn set_availability(&self, referee_id: RefereeId, available: bool) {
        self.referees.write().await.insert(referee_id, available);
    }

    /// Number of registered referees.
    pub async fn len(&self) -> usize {
        self.referees.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.referees.read().await.is_empty()
    }
}

#[async_trait]
impl RefereeDirectory for RefereeRoster {
    async fn is_available(&self, referee_id: RefereeId) -> bool {
        let available = self
            .referees
            .read()
            .await
            .get(&referee_id)
            .copied()
            .unwrap_or(false);

        if !available {
            tracing::debug!(referee_id, "Referee not available");
        }
        available
    }
}
