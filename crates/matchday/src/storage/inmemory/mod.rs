//! In-memory storage backend.
//!
//! Stores matches in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Data is not
//! persisted and is lost when the last handle is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use matchday::storage::inmemory::InMemoryMatchRepository;
//!
//! let repo = InMemoryMatchRepository::new();
//! let created = repo.create_match(&new_match).await?;
//! ```

mod repository;

pub use repository::InMemoryMatchRepository;
