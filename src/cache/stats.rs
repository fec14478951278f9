//! Cache Statistics Module
//!
//! Collects eviction latencies and produces draining statistics snapshots.

use std::collections::VecDeque;
use std::time::Duration;

use crate::cache::MAX_STAT_HISTORY;

// == Cache Stats ==
/// Snapshot returned by a stats read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    /// Time between creation and removal of each entry removed since the
    /// previous stats read, oldest first
    pub time_to_eviction: Vec<Duration>,
    /// Accounted size of the cache in bytes
    pub byte_size: usize,
    /// Number of entries in the cache
    pub item_count: usize,
    /// Time since the previous stats read (or since creation)
    pub stat_duration: Duration,
}

impl CacheStats {
    /// Number of removals recorded in this period.
    pub fn evictions(&self) -> usize {
        self.time_to_eviction.len()
    }

    pub fn min_time_to_eviction(&self) -> Option<Duration> {
        self.time_to_eviction.iter().min().copied()
    }

    pub fn max_time_to_eviction(&self) -> Option<Duration> {
        self.time_to_eviction.iter().max().copied()
    }

    /// Average time to eviction, or None if nothing was removed.
    pub fn mean_time_to_eviction(&self) -> Option<Duration> {
        if self.time_to_eviction.is_empty() {
            return None;
        }
        let total: Duration = self.time_to_eviction.iter().sum();
        Some(total / self.time_to_eviction.len() as u32)
    }
}

// == Eviction History ==
/// Bounded record of eviction latencies; only the most recent
/// `MAX_STAT_HISTORY` samples are kept.
#[derive(Debug, Default)]
pub struct EvictionHistory {
    samples: VecDeque<Duration>,
}

impl EvictionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    // == Record ==
    /// Records one removal, dropping the oldest sample when full.
    pub fn record(&mut self, time_to_eviction: Duration) {
        if self.samples.len() >= MAX_STAT_HISTORY {
            self.samples.pop_front();
        }
        self.samples.push_back(time_to_eviction);
    }

    // == Drain ==
    /// Takes all samples, leaving the history empty.
    pub fn drain(&mut self) -> Vec<Duration> {
        self.samples.drain(..).collect()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.samples.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
