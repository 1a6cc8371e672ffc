//! The cache-aside match service.
//!
//! [`MatchService`] is the only way callers read or write matches. It keeps
//! the cache consistent with the store and announces every committed write.

mod error;
mod matches;

pub use error::{Result, ServiceError};
pub use matches::MatchService;
