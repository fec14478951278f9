//! Cache Store Module
//!
//! LRU engine combining a key index with an arena recency list, byte
//! accounting and lazy age-based expiry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{
    Cache, CacheEntry, CacheItem, CacheStats, EvictionHistory, RecencyList, SizeModel,
    MIN_MAX_SIZE,
};
use crate::error::{CacheError, Result};

// == Inner State ==
/// Everything guarded by the cache lock.
#[derive(Debug)]
struct Inner<T> {
    /// Key to slot index in `order`
    index: HashMap<String, usize>,
    /// Entries, most recently used first
    order: RecencyList<CacheEntry<T>>,
    /// Base overhead plus the size of every entry
    current_size: usize,
    history: EvictionHistory,
    last_stat: Instant,
}

impl<T> Inner<T> {
    // == Remove ==
    /// Unlinks the entry at `idx`, subtracts its size and records its
    /// time to eviction.
    fn remove(&mut self, idx: usize) -> Option<CacheEntry<T>> {
        let entry = self.order.remove(idx)?;
        self.index.remove(&entry.key);
        self.current_size -= entry.size;
        self.history.record(entry.age());
        Some(entry)
    }
}

// == LRU Cache ==
/// Size-bounded LRU cache with optional cache-wide max age.
///
/// All state sits behind a single mutex, so `put`, `get` and `stats` are
/// serialized against each other. Share it between threads with `Arc`.
#[derive(Debug)]
pub struct LruCache<T> {
    inner: Mutex<Inner<T>>,
    max_size: usize,
    max_age: Duration,
    model: SizeModel,
}

impl<T: CacheItem> LruCache<T> {
    // == Constructor ==
    /// Creates a cache with the default size model.
    ///
    /// # Arguments
    /// * `max_size` - Byte budget, raised to `MIN_MAX_SIZE` if at or below it
    /// * `max_age` - Max entry age, `Duration::ZERO` disables expiry
    pub fn new(max_size: usize, max_age: Duration) -> Self {
        Self::with_size_model(max_size, max_age, SizeModel::default())
    }

    /// Creates a cache with custom overhead estimates.
    pub fn with_size_model(max_size: usize, max_age: Duration, model: SizeModel) -> Self {
        let max_size = max_size.max(MIN_MAX_SIZE);

        Self {
            inner: Mutex::new(Inner {
                index: HashMap::new(),
                order: RecencyList::new(),
                current_size: model.base_overhead,
                history: EvictionHistory::new(),
                last_stat: Instant::now(),
            }),
            max_size,
            max_age,
            model,
        }
    }

    // == Put ==
    /// Stores `item` under `key`.
    ///
    /// An existing entry for `key` is removed first. Least recently used
    /// entries are then evicted until the new entry fits. If it does not fit
    /// in an empty cache, `CacheError::TooLarge` is returned and nothing is
    /// inserted.
    pub fn put(&self, key: String, item: T) -> Result<()> {
        let mut inner = self.lock();

        if let Some(&idx) = inner.index.get(&key) {
            inner.remove(idx);
        }

        let entry = CacheEntry::new(key, item, &self.model);

        while entry.size > self.max_size.saturating_sub(inner.current_size) {
            let Some(idx) = inner.order.back() else {
                return Err(CacheError::TooLarge {
                    size: entry.size,
                    max_size: self.max_size,
                });
            };
            if let Some(evicted) = inner.remove(idx) {
                debug!(key = %evicted.key, size = evicted.size, "evicted least recently used entry");
            }
        }

        inner.current_size += entry.size;
        let key = entry.key.clone();
        let idx = inner.order.push_front(entry);
        inner.index.insert(key, idx);
        Ok(())
    }

    // == Get ==
    /// Returns the item stored under `key`, if present and not expired.
    ///
    /// A hit marks the entry most recently used. An expired entry is removed
    /// and reported as a miss.
    pub fn get(&self, key: &str) -> Option<Arc<T>> {
        let mut inner = self.lock();

        let idx = *inner.index.get(key)?;
        let expired = inner.order.get(idx)?.is_expired(self.max_age);
        if expired {
            if let Some(entry) = inner.remove(idx) {
                debug!(key = %entry.key, age_ms = entry.age().as_millis() as u64, "expired entry removed");
            }
            return None;
        }

        inner.order.move_to_front(idx);
        inner.order.get(idx).map(|entry| Arc::clone(&entry.item))
    }

    // == Stats ==
    /// Returns a statistics snapshot and starts a new stats period.
    ///
    /// The eviction latencies are drained, so a second call without
    /// intervening removals returns an empty list.
    pub fn stats(&self) -> CacheStats {
        let mut inner = self.lock();

        let now = Instant::now();
        let stats = CacheStats {
            time_to_eviction: inner.history.drain(),
            byte_size: inner.current_size,
            item_count: inner.order.len(),
            stat_duration: now.duration_since(inner.last_stat),
        };
        inner.last_stat = now;
        stats
    }
}

impl<T> LruCache<T> {
    /// Number of entries currently stored, expired-but-unread included.
    pub fn len(&self) -> usize {
        self.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Accounted size in bytes, including the base overhead.
    pub fn current_size(&self) -> usize {
        self.lock().current_size
    }

    /// Effective byte budget after the minimum was applied.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    pub fn size_model(&self) -> SizeModel {
        self.model
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> Vec<String> {
        self.lock().order.iter().map(|entry| entry.key.clone()).collect()
    }

    /// Reads an item without promoting it or checking its age.
    #[cfg(test)]
    pub(crate) fn peek(&self, key: &str) -> Option<Arc<T>> {
        let inner = self.lock();
        let idx = *inner.index.get(key)?;
        inner.order.get(idx).map(|entry| Arc::clone(&entry.item))
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        // No operation panics between mutations, so a poisoned lock still
        // holds consistent state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: CacheItem> Cache<T> for LruCache<T> {
    fn put(&self, key: String, item: T) -> Result<()> {
        LruCache::put(self, key, item)
    }

    fn get(&self, key: &str) -> Option<Arc<T>> {
        LruCache::get(self, key)
    }

    fn stats(&self) -> CacheStats {
        LruCache::stats(self)
    }
}
