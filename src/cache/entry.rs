//! Cache Entry Module
//!
//! Defines the unit stored by the cache and its accounted byte cost.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::cache::{CacheItem, BASE_OVERHEAD, ENTRY_OVERHEAD, MAP_ENTRY_OVERHEAD};

// == Size Model ==
/// Heuristic overheads added on top of key and item bytes.
///
/// These approximate the bookkeeping memory of the cache itself. They are
/// estimates, not measurements, and can be tuned per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeModel {
    /// Per-entry overhead: arena node with its links, key header, item handle,
    /// timestamp and size field
    pub entry_overhead: usize,
    /// Per-entry overhead of one slot in the key index
    pub map_entry_overhead: usize,
    /// Fixed overhead of the cache structure, counted once
    pub base_overhead: usize,
}

impl Default for SizeModel {
    fn default() -> Self {
        Self {
            entry_overhead: ENTRY_OVERHEAD,
            map_entry_overhead: MAP_ENTRY_OVERHEAD,
            base_overhead: BASE_OVERHEAD,
        }
    }
}

impl SizeModel {
    /// Accounted cost of storing `item` under `key`, saturating at
    /// `usize::MAX`.
    pub fn entry_size<T: CacheItem + ?Sized>(&self, key: &str, item: &T) -> usize {
        self.entry_overhead
            .saturating_add(key.len())
            .saturating_add(item.byte_size())
            .saturating_add(self.map_entry_overhead)
    }
}

// == Cache Entry ==
/// A stored item together with its key, creation time and accounted size.
#[derive(Debug)]
pub struct CacheEntry<T> {
    /// The stored item, shared with callers of `get`
    pub item: Arc<T>,
    /// Copy of the key so an entry evicted from the recency list can be
    /// removed from the key index
    pub key: String,
    /// Insertion time
    pub created_at: Instant,
    /// Accounted size in bytes, fixed at construction
    pub size: usize,
}

impl<T: CacheItem> CacheEntry<T> {
    // == Constructor ==
    /// Creates an entry and computes its size once.
    pub fn new(key: String, item: T, model: &SizeModel) -> Self {
        let size = model.entry_size(&key, &item);

        Self {
            item: Arc::new(item),
            key,
            created_at: Instant::now(),
            size,
        }
    }
}

impl<T> CacheEntry<T> {
    // == Is Expired ==
    /// Checks whether the entry is older than `max_age`.
    ///
    /// A zero `max_age` disables expiry. The boundary is exclusive: an entry
    /// exactly `max_age` old is still valid.
    pub fn is_expired(&self, max_age: Duration) -> bool {
        !max_age.is_zero() && self.age() > max_age
    }

    // == Age ==
    /// Time elapsed since insertion.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}
