//! Redis cache backend implementation.
//!
//! Shares cached match records between service instances. Connections go
//! through a connection manager that reconnects on its own.

mod cache;
mod error;

pub use cache::RedisCache;
