//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `matchday_core::storage`. The in-process store is the only
//! backend; it owns id assignment and listing order.

pub mod inmemory;

pub use inmemory::InMemoryMatchRepository;
