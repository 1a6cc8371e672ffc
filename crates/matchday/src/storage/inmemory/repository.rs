//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use matchday_core::matches::{merge_match, select_matches, Match, MatchId, MatchPatch, NewMatch};
use matchday_core::storage::{ListQuery, MatchRepository, Result};

#[derive(Debug)]
struct StoreState {
    next_id: MatchId,
    matches: BTreeMap<MatchId, Match>,
}

/// In-memory match store.
///
/// Ids start at 1 and are never reused, even after a delete. Each operation
/// takes the lock once, so every call is atomic with respect to the others.
#[derive(Debug, Clone)]
pub struct InMemoryMatchRepository {
    state: Arc<RwLock<StoreState>>,
}

impl Default for InMemoryMatchRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMatchRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                next_id: 1,
                matches: BTreeMap::new(),
            })),
        }
    }

    /// Number of stored matches.
    pub async fn len(&self) -> usize {
        self.state.read().await.matches.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.matches.is_empty()
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn create_match(&self, new: &NewMatch) -> Result<Match> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let record = Match::from_new(id, new, Utc::now());
        state.matches.insert(id, record.clone());
        Ok(record)
    }

    async fn get_match(&self, id: MatchId) -> Result<Option<Match>> {
        let state = self.state.read().await;
        Ok(state.matches.get(&id).cloned())
    }

    async fn list_matches(&self, query: &ListQuery) -> Result<Vec<Match>> {
        let state = self.state.read().await;
        Ok(select_matches(state.matches.values(), query))
    }

    async fn update_match(&self, id: MatchId, patch: &MatchPatch) -> Result<Option<Match>> {
        let mut state = self.state.write().await;
        let Some(existing) = state.matches.get_mut(&id) else {
            return Ok(None);
        };

        let merged = merge_match(existing, patch, Utc::now());
        *existing = merged.clone();
        Ok(Some(merged))
    }

    async fn delete_match(&self, id: MatchId) -> Result<Option<Match>> {
        let mut state = self.state.write().await;
        Ok(state.matches.remove(&id))
    }
}
