//! Byte Cache - A size-bounded in-memory LRU cache
//!
//! Stores arbitrary items under string keys within a byte budget, with
//! optional cache-wide max age and eviction latency statistics. An HTTP
//! front end for caching request bodies is included.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{Cache, CacheItem, CacheStats, LruCache, SizeModel};
pub use config::Config;
pub use error::{CacheError, Result};
