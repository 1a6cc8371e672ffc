use crate::matches::MatchId;
use crate::storage::ListQuery;

/// Reserved key of the default unfiltered listing.
///
/// Every successful write deletes this key. Listings cached under any other
/// filter or page are left to expire on their own.
pub const DEFAULT_LISTING_KEY: &str = "matches:all";

/// Pub/sub channel that match state changes are announced on.
pub const MATCH_EVENTS_CHANNEL: &str = "match_events";

/// Returns the cache key for a single match.
///
/// # Examples
///
/// ```
/// use matchday_core::cache::match_key;
///
/// assert_eq!(match_key(1), "match:1");
/// ```
pub fn match_key(id: MatchId) -> String {
    format!("match:{}", id)
}

/// Returns the cache key for a listing.
///
/// The default query (no referee filter, first page, default size) maps to
/// [`DEFAULT_LISTING_KEY`]. Every other combination gets its own key of the
/// form `matches:{referee_id|all}:{skip}:{limit}`.
///
/// # Examples
///
/// ```
/// use matchday_core::cache::{matches_key, DEFAULT_LISTING_KEY};
/// use matchday_core::storage::ListQuery;
///
/// assert_eq!(matches_key(&ListQuery::default()), DEFAULT_LISTING_KEY);
/// assert_eq!(matches_key(&ListQuery::for_referee(7)), "matches:7:0:100");
/// assert_eq!(
///     matches_key(&ListQuery::default().with_page(20, 10)),
///     "matches:all:20:10"
/// );
/// ```
pub fn matches_key(query: &ListQuery) -> String {
    if query.is_default() {
        return DEFAULT_LISTING_KEY.to_string();
    }

    let filter = query
        .referee_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "all".to_string());

    format!("matches:{}:{}:{}", filter, query.skip, query.limit)
}

/// Returns the keys a committed write must delete.
///
/// Creates have no prior single-record entry, so only the default listing
/// is cleared. Updates and deletes also clear the record's own key.
pub fn invalidation_keys(id: Option<MatchId>) -> Vec<String> {
    let mut keys = Vec::with_capacity(2);
    if let Some(id) = id {
        keys.push(match_key(id));
    }
    keys.push(DEFAULT_LISTING_KEY.to_string());
    keys
}
