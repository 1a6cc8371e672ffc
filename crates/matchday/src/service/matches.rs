//! Cache-aside reads and invalidating writes for matches.

use std::sync::Arc;
use std::time::Duration;

use matchday_core::cache::{invalidation_keys, match_key, matches_key, Cache, MatchPubSub};
use matchday_core::matches::{
    validate_new_match, validate_patch, Match, MatchEvent, MatchId, MatchPatch, NewMatch,
    RefereeId,
};
use matchday_core::referee::RefereeDirectory;
use matchday_core::storage::{ListQuery, MatchRepository};

use super::{Result, ServiceError};
use crate::cache::GuardedCache;

/// Match service with cache-aside reads.
///
/// - **Reads**: check the cache first; on a miss fetch from the store and
///   populate the cache. "Not found" is never cached.
/// - **Writes**: commit to the store, then delete the record key and the
///   default listing key, then publish an event.
///
/// Only the default listing key is invalidated on writes. Filtered and
/// paginated listings keep serving their cached page until the TTL runs out.
///
/// # Type Parameters
///
/// * `R` - The store
/// * `C` - The cache backend, reached through [`GuardedCache`]
/// * `P` - The pub/sub used to announce writes
/// * `V` - The referee directory consulted before assignments
pub struct MatchService<R, C, P, V>
where
    R: MatchRepository,
    C: Cache,
    P: MatchPubSub,
    V: RefereeDirectory,
{
    repository: Arc<R>,
    cache: GuardedCache<C>,
    pubsub: Arc<P>,
    referees: Arc<V>,
    ttl: Duration,
}

impl<R, C, P, V> Clone for MatchService<R, C, P, V>
where
    R: MatchRepository,
    C: Cache,
    P: MatchPubSub,
    V: RefereeDirectory,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            cache: self.cache.clone(),
            pubsub: Arc::clone(&self.pubsub),
            referees: Arc::clone(&self.referees),
            ttl: self.ttl,
        }
    }
}

impl<R, C, P, V> MatchService<R, C, P, V>
where
    R: MatchRepository,
    C: Cache,
    P: MatchPubSub,
    V: RefereeDirectory,
{
    /// Creates a new match service.
    ///
    /// # Arguments
    ///
    /// * `repository` - The store holding the authoritative records
    /// * `cache` - The cache backend
    /// * `pubsub` - Where write events are published
    /// * `referees` - Availability lookups for referee assignments
    /// * `ttl` - Expiration applied to every cache entry written
    pub fn new(
        repository: Arc<R>,
        cache: Arc<C>,
        pubsub: Arc<P>,
        referees: Arc<V>,
        ttl: Duration,
    ) -> Self {
        Self {
            repository,
            cache: GuardedCache::new(cache),
            pubsub,
            referees,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Creates a match after validating it and checking the referee.
    pub async fn create_match(&self, new: NewMatch) -> Result<Match> {
        validate_new_match(&new)?;
        self.ensure_referee_available(new.referee_id).await?;

        let created = self.repository.create_match(&new).await?;
        tracing::debug!(
            match_id = created.id,
            referee_id = created.referee_id,
            "Match created"
        );

        self.invalidate(None).await;
        self.publish(MatchEvent::created(created.id)).await;

        Ok(created)
    }

    /// Fetches a match, serving it from the cache when possible.
    pub async fn get_match(&self, id: MatchId) -> Result<Option<Match>> {
        let key = match_key(id);

        if let Some(record) = self.cache.get_match(&key).await {
            tracing::trace!(match_id = id, "Cache hit for match");
            return Ok(Some(record));
        }

        tracing::trace!(match_id = id, "Cache miss for match");
        let record = self.repository.get_match(id).await?;

        if let Some(record) = &record {
            self.cache.set_match(&key, record, self.ttl).await;
        }

        Ok(record)
    }

    /// Lists one page of matches, serving it from the cache when possible.
    ///
    /// An empty page is a valid result and is cached like any other.
    pub async fn list_matches(&self, query: ListQuery) -> Result<Vec<Match>> {
        let key = matches_key(&query);

        if let Some(records) = self.cache.get_matches(&key).await {
            tracing::trace!(key = %key, count = records.len(), "Cache hit for listing");
            return Ok(records);
        }

        tracing::trace!(key = %key, "Cache miss for listing");
        let records = self.repository.list_matches(&query).await?;
        self.cache.set_matches(&key, &records, self.ttl).await;

        Ok(records)
    }

    /// Applies a partial update.
    ///
    /// The referee is only checked when the patch reassigns one.
    pub async fn update_match(&self, id: MatchId, patch: MatchPatch) -> Result<Option<Match>> {
        validate_patch(&patch)?;
        if let Some(referee_id) = patch.referee_id {
            self.ensure_referee_available(referee_id).await?;
        }

        if patch.is_empty() {
            tracing::debug!(match_id = id, "Empty patch, only updated_at changes");
        }

        let Some(updated) = self.repository.update_match(id, &patch).await? else {
            return Ok(None);
        };
        tracing::debug!(match_id = id, status = %updated.status, "Match updated");

        self.invalidate(Some(id)).await;
        self.publish(MatchEvent::updated(id)).await;

        Ok(Some(updated))
    }

    /// Deletes a match and returns the record as it was before deletion.
    pub async fn delete_match(&self, id: MatchId) -> Result<Option<Match>> {
        let Some(deleted) = self.repository.delete_match(id).await? else {
            return Ok(None);
        };
        tracing::debug!(match_id = id, "Match deleted");

        self.invalidate(Some(id)).await;
        self.publish(MatchEvent::deleted(id)).await;

        Ok(Some(deleted))
    }

    async fn ensure_referee_available(&self, referee_id: RefereeId) -> Result<()> {
        if self.referees.is_available(referee_id).await {
            Ok(())
        } else {
            Err(ServiceError::RefereeUnavailable(referee_id))
        }
    }

    async fn invalidate(&self, id: Option<MatchId>) {
        for key in invalidation_keys(id) {
            self.cache.delete(&key).await;
        }
    }

    async fn publish(&self, event: MatchEvent) {
        if let Err(e) = self.pubsub.publish(&event).await {
            tracing::warn!(
                event = event.kind(),
                match_id = event.match_id(),
                error = %e,
                "Failed to publish match event"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use tokio::sync::{broadcast, RwLock};

    use matchday_core::cache::{CacheError, Result as CacheResult, DEFAULT_LISTING_KEY};
    use matchday_core::matches::MatchStatus;
    use matchday_core::storage::{RepositoryError, Result as RepoResult};

    use crate::referee::RefereeRoster;
    use crate::storage::InMemoryMatchRepository;

    const TTL: Duration = Duration::from_secs(300);

    // Store that counts calls and can be switched into a failing mode
    #[derive(Default)]
    struct CountingRepository {
        inner: InMemoryMatchRepository,
        fail: AtomicBool,
        create_calls: AtomicUsize,
        get_calls: AtomicUsize,
        list_calls: AtomicUsize,
        update_calls: AtomicUsize,
        delete_calls: AtomicUsize,
    }

    impl CountingRepository {
        fn check(&self, counter: &AtomicUsize) -> RepoResult<()> {
            counter.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                Err(RepositoryError::ConnectionFailed(
                    "connection reset".to_string(),
                ))
            } else {
                Ok(())
            }
        }

        fn gets(&self) -> usize {
            self.get_calls.load(Ordering::SeqCst)
        }

        fn lists(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MatchRepository for CountingRepository {
        async fn create_match(&self, new: &NewMatch) -> RepoResult<Match> {
            self.check(&self.create_calls)?;
            self.inner.create_match(new).await
        }

        async fn get_match(&self, id: MatchId) -> RepoResult<Option<Match>> {
            self.check(&self.get_calls)?;
            self.inner.get_match(id).await
        }

        async fn list_matches(&self, query: &ListQuery) -> RepoResult<Vec<Match>> {
            self.check(&self.list_calls)?;
            self.inner.list_matches(query).await
        }

        async fn update_match(&self, id: MatchId, patch: &MatchPatch) -> RepoResult<Option<Match>> {
            self.check(&self.update_calls)?;
            self.inner.update_match(id, patch).await
        }

        async fn delete_match(&self, id: MatchId) -> RepoResult<Option<Match>> {
            self.check(&self.delete_calls)?;
            self.inner.delete_match(id).await
        }
    }

    // Map-backed cache; with `fail` set every call errors
    #[derive(Default)]
    struct MockCache {
        store: RwLock<HashMap<String, Vec<u8>>>,
        fail: AtomicBool,
        get_calls: AtomicUsize,
        set_calls: AtomicUsize,
        ttls: RwLock<HashMap<String, Option<Duration>>>,
        deleted: RwLock<Vec<String>>,
    }

    impl MockCache {
        fn failure(&self) -> CacheResult<()> {
            if self.fail.load(Ordering::SeqCst) {
                Err(CacheError::ConnectionFailed("connection refused".to_string()))
            } else {
                Ok(())
            }
        }

        async fn contains(&self, key: &str) -> bool {
            self.store.read().await.contains_key(key)
        }

        async fn deleted_keys(&self) -> Vec<String> {
            self.deleted.read().await.clone()
        }

        async fn ttl_for(&self, key: &str) -> Option<Option<Duration>> {
            self.ttls.read().await.get(key).copied()
        }

        fn sets(&self) -> usize {
            self.set_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Cache for MockCache {
        async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            self.failure()?;
            Ok(self.store.read().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> CacheResult<()> {
            self.set_calls.fetch_add(1, Ordering::SeqCst);
            self.ttls.write().await.insert(key.to_string(), ttl);
            self.failure()?;
            self.store
                .write()
                .await
                .insert(key.to_string(), value.to_vec());
            Ok(())
        }

        async fn delete(&self, key: &str) -> CacheResult<()> {
            self.deleted.write().await.push(key.to_string());
            self.failure()?;
            self.store.write().await.remove(key);
            Ok(())
        }
    }

    // Pub/sub that records published events
    struct MockPubSub {
        events: RwLock<Vec<MatchEvent>>,
        fail: AtomicBool,
        sender: broadcast::Sender<MatchEvent>,
    }

    impl MockPubSub {
        fn new() -> Self {
            let (sender, _) = broadcast::channel(16);
            Self {
                events: RwLock::new(Vec::new()),
                fail: AtomicBool::new(false),
                sender,
            }
        }

        async fn published(&self) -> Vec<MatchEvent> {
            self.events.read().await.clone()
        }
    }

    #[async_trait]
    impl MatchPubSub for MockPubSub {
        async fn publish(&self, event: &MatchEvent) -> CacheResult<()> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(CacheError::PublishFailed("broker down".to_string()));
            }
            self.events.write().await.push(*event);
            let _ = self.sender.send(*event);
            Ok(())
        }

        async fn subscribe(&self) -> CacheResult<broadcast::Receiver<MatchEvent>> {
            Ok(self.sender.subscribe())
        }
    }

    struct Harness {
        service: MatchService<CountingRepository, MockCache, MockPubSub, RefereeRoster>,
        repo: Arc<CountingRepository>,
        cache: Arc<MockCache>,
        pubsub: Arc<MockPubSub>,
        roster: Arc<RefereeRoster>,
    }

    fn harness() -> Harness {
        let repo = Arc::new(CountingRepository::default());
        let cache = Arc::new(MockCache::default());
        let pubsub = Arc::new(MockPubSub::new());
        // Referees 7 and 8 are available, 9 is not
        let roster = Arc::new(RefereeRoster::from_spec("7,8,9:unavailable").unwrap());

        let service = MatchService::new(
            Arc::clone(&repo),
            Arc::clone(&cache),
            Arc::clone(&pubsub),
            Arc::clone(&roster),
            TTL,
        );

        Harness {
            service,
            repo,
            cache,
            pubsub,
            roster,
        }
    }

    fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 18, 30, 0).unwrap()
    }

    fn new_match(referee_id: i64) -> NewMatch {
        NewMatch::new("A", "B", referee_id, kickoff())
    }

    #[tokio::test]
    async fn test_create_get_update_scenario() {
        let h = harness();

        let created = h.service.create_match(new_match(7)).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.status, MatchStatus::Scheduled);

        // First read goes to the store and fills the cache
        let first = h.service.get_match(1).await.unwrap().unwrap();
        assert_eq!(h.repo.gets(), 1);
        assert!(h.cache.contains("match:1").await);

        // Second read is served from the cache
        let second = h.service.get_match(1).await.unwrap().unwrap();
        assert_eq!(h.repo.gets(), 1);
        assert_eq!(first, second);
        assert_eq!(second, created);

        let patch = MatchPatch::default().with_status(MatchStatus::Ongoing);
        let updated = h.service.update_match(1, patch).await.unwrap().unwrap();
        assert_eq!(updated.status, MatchStatus::Ongoing);
        assert!(!h.cache.contains("match:1").await);

        // The next read fetches fresh data from the store
        let fresh = h.service.get_match(1).await.unwrap().unwrap();
        assert_eq!(h.repo.gets(), 2);
        assert_eq!(fresh.status, MatchStatus::Ongoing);

        assert_eq!(
            h.pubsub.published().await,
            vec![MatchEvent::created(1), MatchEvent::updated(1)]
        );
    }

    #[tokio::test]
    async fn test_create_invalidates_only_default_listing() {
        let h = harness();

        h.service.create_match(new_match(7)).await.unwrap();

        assert_eq!(h.cache.deleted_keys().await, vec![DEFAULT_LISTING_KEY]);
    }

    #[tokio::test]
    async fn test_delete_invalidates_and_returns_snapshot() {
        let h = harness();
        let created = h.service.create_match(new_match(7)).await.unwrap();

        h.service.get_match(created.id).await.unwrap();
        assert!(h.cache.contains("match:1").await);

        let deleted = h.service.delete_match(created.id).await.unwrap();
        assert_eq!(deleted, Some(created));
        assert!(!h.cache.contains("match:1").await);

        let deleted_keys = h.cache.deleted_keys().await;
        assert!(deleted_keys.contains(&"match:1".to_string()));
        assert!(deleted_keys.contains(&DEFAULT_LISTING_KEY.to_string()));

        // A deleted match is a fresh store miss, and the miss is not cached
        assert_eq!(h.service.get_match(1).await.unwrap(), None);
        assert_eq!(h.repo.gets(), 2);
        assert!(!h.cache.contains("match:1").await);

        assert_eq!(
            h.pubsub.published().await.last(),
            Some(&MatchEvent::deleted(1))
        );
    }

    #[tokio::test]
    async fn test_not_found_is_never_cached() {
        let h = harness();

        assert_eq!(h.service.get_match(42).await.unwrap(), None);
        assert_eq!(h.service.get_match(42).await.unwrap(), None);

        assert_eq!(h.repo.gets(), 2);
        assert_eq!(h.cache.sets(), 0);
    }

    #[tokio::test]
    async fn test_default_listing_is_refreshed_after_write() {
        let h = harness();
        h.service.create_match(new_match(7)).await.unwrap();

        let before = h.service.list_matches(ListQuery::default()).await.unwrap();
        h.service.list_matches(ListQuery::default()).await.unwrap();
        assert_eq!(before.len(), 1);
        assert_eq!(h.repo.lists(), 1);

        h.service.create_match(new_match(8)).await.unwrap();

        let after = h.service.list_matches(ListQuery::default()).await.unwrap();
        assert_eq!(after.len(), 2);
        assert_eq!(h.repo.lists(), 2);
    }

    #[tokio::test]
    async fn test_filtered_listing_stays_stale_across_writes() {
        let h = harness();
        h.service.create_match(new_match(7)).await.unwrap();

        let query = ListQuery::for_referee(7);
        let cached = h.service.list_matches(query).await.unwrap();
        assert_eq!(cached.len(), 1);

        // Writes only clear the default listing key
        h.service.create_match(new_match(7)).await.unwrap();
        let patch = MatchPatch::default().with_status(MatchStatus::Canceled);
        h.service.update_match(1, patch).await.unwrap();

        let stale = h.service.list_matches(query).await.unwrap();
        assert_eq!(stale, cached);
        assert_eq!(stale[0].status, MatchStatus::Scheduled);
        assert_eq!(h.repo.lists(), 1);
        assert!(h.cache.contains("matches:7:0:100").await);
    }

    #[tokio::test]
    async fn test_paginated_listing_uses_distinct_key() {
        let h = harness();
        h.service.create_match(new_match(7)).await.unwrap();
        h.service.create_match(new_match(8)).await.unwrap();

        let page = h
            .service
            .list_matches(ListQuery::default().with_page(1, 1))
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, 2);
        assert!(h.cache.contains("matches:all:1:1").await);
        assert!(!h.cache.contains(DEFAULT_LISTING_KEY).await);
    }

    #[tokio::test]
    async fn test_empty_listing_is_cached() {
        let h = harness();

        assert!(h
            .service
            .list_matches(ListQuery::default())
            .await
            .unwrap()
            .is_empty());
        assert!(h
            .service
            .list_matches(ListQuery::default())
            .await
            .unwrap()
            .is_empty());

        assert_eq!(h.repo.lists(), 1);
    }

    #[tokio::test]
    async fn test_writes_on_missing_match_touch_nothing() {
        let h = harness();

        let patch = MatchPatch::default().with_status(MatchStatus::Finished);
        assert_eq!(h.service.update_match(5, patch).await.unwrap(), None);
        assert_eq!(h.service.delete_match(5).await.unwrap(), None);

        assert!(h.cache.deleted_keys().await.is_empty());
        assert!(h.pubsub.published().await.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates_and_leaves_cache_alone() {
        let h = harness();
        h.service.create_match(new_match(7)).await.unwrap();
        h.service.get_match(1).await.unwrap();
        let deletes_before = h.cache.deleted_keys().await.len();
        let events_before = h.pubsub.published().await.len();

        h.repo.fail.store(true, Ordering::SeqCst);

        let patch = MatchPatch::default().with_status(MatchStatus::Ongoing);
        let err = h.service.update_match(1, patch).await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::Repository(RepositoryError::ConnectionFailed(
                "connection reset".to_string()
            ))
        );
        assert_eq!(err.status_code(), 503);

        assert!(h.service.delete_match(1).await.is_err());
        assert!(h.service.create_match(new_match(7)).await.is_err());
        assert!(h.service.list_matches(ListQuery::default()).await.is_err());

        // The cached record survives and still serves reads
        assert!(h.cache.contains("match:1").await);
        assert!(h.service.get_match(1).await.unwrap().is_some());
        assert_eq!(h.cache.deleted_keys().await.len(), deletes_before);
        assert_eq!(h.pubsub.published().await.len(), events_before);
    }

    #[tokio::test]
    async fn test_cache_failure_is_transparent() {
        let h = harness();
        h.cache.fail.store(true, Ordering::SeqCst);

        let created = h.service.create_match(new_match(7)).await.unwrap();

        // Every read falls through to the store
        assert_eq!(h.service.get_match(1).await.unwrap(), Some(created.clone()));
        assert_eq!(h.service.get_match(1).await.unwrap(), Some(created.clone()));
        assert_eq!(h.repo.gets(), 2);

        let listed = h.service.list_matches(ListQuery::default()).await.unwrap();
        assert_eq!(listed, vec![created.clone()]);

        let patch = MatchPatch::default().with_status(MatchStatus::Finished);
        let updated = h.service.update_match(1, patch).await.unwrap().unwrap();
        assert_eq!(updated.status, MatchStatus::Finished);

        let deleted = h.service.delete_match(1).await.unwrap().unwrap();
        assert_eq!(deleted.status, MatchStatus::Finished);
        assert_eq!(h.service.get_match(1).await.unwrap(), None);

        assert!(h.cache.get_calls.load(Ordering::SeqCst) > 0);
        assert_eq!(h.pubsub.published().await.len(), 3);
    }

    #[tokio::test]
    async fn test_unavailable_referee_rejected_before_store() {
        let h = harness();

        let err = h.service.create_match(new_match(9)).await.unwrap_err();
        assert_eq!(err, ServiceError::RefereeUnavailable(9));

        let err = h.service.create_match(new_match(99)).await.unwrap_err();
        assert_eq!(err, ServiceError::RefereeUnavailable(99));

        assert_eq!(h.repo.create_calls.load(Ordering::SeqCst), 0);
        assert!(h.cache.deleted_keys().await.is_empty());
        assert!(h.pubsub.published().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_checks_referee_only_when_reassigned() {
        let h = harness();
        h.service.create_match(new_match(7)).await.unwrap();

        // The current referee going unavailable does not block other edits
        h.roster.set_availability(7, false).await;
        let patch = MatchPatch::default().with_status(MatchStatus::Ongoing);
        assert!(h.service.update_match(1, patch).await.unwrap().is_some());

        let err = h
            .service
            .update_match(1, MatchPatch::default().with_referee(9))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::RefereeUnavailable(9));
        assert_eq!(h.repo.update_calls.load(Ordering::SeqCst), 1);

        let reassigned = h
            .service
            .update_match(1, MatchPatch::default().with_referee(8))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reassigned.referee_id, 8);
    }

    #[tokio::test]
    async fn test_invalid_payloads_rejected() {
        let h = harness();

        let err = h
            .service
            .create_match(NewMatch::new(" ", "B", 7, kickoff()))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(_)));
        assert_eq!(err.status_code(), 400);

        let patch = MatchPatch {
            team_b: Some(String::new()),
            ..MatchPatch::default()
        };
        assert!(matches!(
            h.service.update_match(1, patch).await,
            Err(ServiceError::Invalid(_))
        ));
        assert_eq!(h.repo.create_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.repo.update_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_publish_failure_does_not_fail_write() {
        let h = harness();
        h.pubsub.fail.store(true, Ordering::SeqCst);

        let created = h.service.create_match(new_match(7)).await.unwrap();
        assert_eq!(h.repo.inner.get_match(created.id).await.unwrap(), Some(created));
        assert!(h.pubsub.published().await.is_empty());
    }

    #[tokio::test]
    async fn test_cached_match_equals_store_record() {
        let h = harness();
        let created = h
            .service
            .create_match(new_match(7).with_location("Main Stadium"))
            .await
            .unwrap();
        let patch = MatchPatch::default()
            .with_status(MatchStatus::Finished)
            .with_result(serde_json::json!({"score": [2, 1]}));
        h.service.update_match(created.id, patch).await.unwrap();

        let from_store = h.service.get_match(created.id).await.unwrap().unwrap();
        let from_cache = h.service.get_match(created.id).await.unwrap().unwrap();

        assert_eq!(h.repo.gets(), 1);
        assert_eq!(from_store, from_cache);
    }

    #[tokio::test]
    async fn test_null_result_reads_the_same_from_store_and_cache() {
        let h = harness();
        h.service.create_match(new_match(7)).await.unwrap();

        let patch = MatchPatch::default().with_result(serde_json::Value::Null);
        let updated = h.service.update_match(1, patch).await.unwrap().unwrap();
        assert_eq!(updated.result, None);

        let from_store = h.service.get_match(1).await.unwrap().unwrap();
        let from_cache = h.service.get_match(1).await.unwrap().unwrap();

        assert_eq!(h.repo.gets(), 1);
        assert_eq!(from_store, from_cache);
        assert_eq!(from_cache, updated);
    }

    #[tokio::test]
    async fn test_read_path_populates_with_configured_ttl() {
        let h = harness();
        h.service.create_match(new_match(7)).await.unwrap();

        h.service.get_match(1).await.unwrap();
        h.service.list_matches(ListQuery::default()).await.unwrap();
        h.service
            .list_matches(ListQuery::for_referee(7))
            .await
            .unwrap();

        assert_eq!(h.cache.ttl_for("match:1").await, Some(Some(TTL)));
        assert_eq!(h.cache.ttl_for(DEFAULT_LISTING_KEY).await, Some(Some(TTL)));
        assert_eq!(h.cache.ttl_for("matches:7:0:100").await, Some(Some(TTL)));
    }

    #[tokio::test]
    async fn test_ttl_follows_service_configuration() {
        let repo = Arc::new(CountingRepository::default());
        let cache = Arc::new(MockCache::default());
        let service = MatchService::new(
            Arc::clone(&repo),
            Arc::clone(&cache),
            Arc::new(MockPubSub::new()),
            Arc::new(RefereeRoster::from_spec("7").unwrap()),
            Duration::from_secs(42),
        );

        service.create_match(new_match(7)).await.unwrap();
        service.get_match(1).await.unwrap();

        assert_eq!(
            cache.ttl_for("match:1").await,
            Some(Some(Duration::from_secs(42)))
        );
    }

    #[tokio::test]
    async fn test_empty_patch_refreshes_updated_at_and_invalidates() {
        let h = harness();
        let created = h.service.create_match(new_match(7)).await.unwrap();
        h.service.get_match(1).await.unwrap();

        let updated = h
            .service
            .update_match(1, MatchPatch::default())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            Match {
                updated_at: created.updated_at,
                ..updated.clone()
            },
            created
        );
        assert!(updated.updated_at >= created.updated_at);
        assert!(!h.cache.contains("match:1").await);
    }

    #[tokio::test]
    async fn test_clones_share_collaborators() {
        let h = harness();
        let other = h.service.clone();

        other.create_match(new_match(7)).await.unwrap();
        assert!(h.service.get_match(1).await.unwrap().is_some());
        assert_eq!(other.ttl(), TTL);
    }
}
