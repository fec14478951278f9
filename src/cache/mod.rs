//! Cache Module
//!
//! Provides a size-bounded in-memory cache with LRU eviction, optional
//! cache-wide max age and eviction latency statistics.
//!
//! Entry sizes are a heuristic: key and item bytes plus fixed overheads that
//! estimate the bookkeeping memory of the arena node and the key index slot.

mod entry;
mod lru;
mod stats;
mod store;


use std::sync::Arc;

use crate::error::Result;

// Re-export public types
pub use entry::{CacheEntry, SizeModel};
pub use lru::RecencyList;
pub use stats::{CacheStats, EvictionHistory};
pub use store::LruCache;

// == Public Constants ==
/// Estimated per-entry overhead in bytes.
///
/// Arena node: item handle (8), key header (24), creation instant (16),
/// size (8) and the two links (16).
pub const ENTRY_OVERHEAD: usize = 8 + 24 + 16 + 8 + 16;

/// Estimated overhead in bytes of one key index slot.
///
/// Key header (24), slot index (8), plus control byte and load factor slack.
pub const MAP_ENTRY_OVERHEAD: usize = 24 + 8 + 8;

/// Estimated fixed overhead of an empty cache in bytes.
pub const BASE_OVERHEAD: usize = 160;

/// Smallest byte budget a cache accepts; smaller budgets are raised to it.
pub const MIN_MAX_SIZE: usize = 1_000_000;

/// Eviction latencies retained per stats period.
pub const MAX_STAT_HISTORY: usize = 1000;

// == Cache Item ==
/// A value that can report its own memory footprint.
pub trait CacheItem {
    /// Approximate size of the value in bytes.
    fn byte_size(&self) -> usize;
}

impl CacheItem for String {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl CacheItem for str {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl CacheItem for Vec<u8> {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl CacheItem for Box<[u8]> {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl<T: CacheItem + ?Sized> CacheItem for Arc<T> {
    fn byte_size(&self) -> usize {
        (**self).byte_size()
    }
}

// == Cache Trait ==
/// Operations every cache implementation provides.
pub trait Cache<T: CacheItem> {
    /// Stores `item` under `key`, replacing any previous entry.
    fn put(&self, key: String, item: T) -> Result<()>;

    /// Returns the item under `key`, or None when missing or expired.
    fn get(&self, key: &str) -> Option<Arc<T>>;

    /// Returns statistics for the period since the previous call and starts
    /// a new period.
    fn stats(&self) -> CacheStats;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_sizes() {
        assert_eq!("hello".to_string().byte_size(), 5);
        assert_eq!("hello".byte_size(), 5);
        assert_eq!(vec![0u8; 12].byte_size(), 12);
        assert_eq!(vec![0u8; 3].into_boxed_slice().byte_size(), 3);
        assert_eq!(Arc::new("abc".to_string()).byte_size(), 3);
    }
}
