//! Functional core for matchday.
//!
//! Pure domain types and functions plus the async traits that the
//! imperative shell (`matchday` crate) implements: storage, cache,
//! pub/sub and referee availability.

pub mod cache;
pub mod matches;
pub mod referee;
pub mod serde;
pub mod storage;
