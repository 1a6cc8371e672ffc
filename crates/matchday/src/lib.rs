//! Match records behind a cache-aside service.
//!
//! The [`service::MatchService`] mediates every read and write between
//! callers, the store and the cache. Everything else in this crate is a
//! concrete collaborator or process plumbing around it.

pub mod cache;
pub mod config;
pub mod events;
pub mod referee;
pub mod seed;
pub mod service;
pub mod state;
pub mod storage;
