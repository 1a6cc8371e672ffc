use async_trait::async_trait;

use crate::matches::RefereeId;

/// Answers whether a referee may be assigned to a match.
///
/// There is no error channel: a referee that cannot be looked up (unknown,
/// or the directory is unreachable) is reported as not available so a
/// match is never assigned to an unverified referee.
#[async_trait]
pub trait RefereeDirectory: Send + Sync {
    /// Returns true if the referee exists and is available.
    async fn is_available(&self, referee_id: RefereeId) -> bool;
}
