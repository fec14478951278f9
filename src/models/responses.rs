//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing JSON response bodies.

use std::time::Duration;

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for PUT /cache/:key
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    /// Success message
    pub message: String,
    /// The key that was stored
    pub key: String,
    /// Size of the stored body in bytes
    pub size: usize,
}

impl PutResponse {
    /// Creates a new PutResponse
    pub fn new(key: impl Into<String>, size: usize) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' stored successfully", key),
            key,
            size,
        }
    }
}

/// Eviction latency summary in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeToEvictionSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Accounted cache size in bytes
    pub byte_size: usize,
    /// Current number of entries in cache
    pub item_count: usize,
    /// Milliseconds since the previous stats request
    pub stat_duration_ms: f64,
    /// Number of entries removed since the previous stats request
    pub evictions: usize,
    /// Latency summary, null when nothing was removed
    pub time_to_eviction_ms: Option<TimeToEvictionSummary>,
}

impl From<&CacheStats> for StatsResponse {
    fn from(stats: &CacheStats) -> Self {
        let time_to_eviction_ms = match (
            stats.min_time_to_eviction(),
            stats.max_time_to_eviction(),
            stats.mean_time_to_eviction(),
        ) {
            (Some(min), Some(max), Some(mean)) => Some(TimeToEvictionSummary {
                min: millis(min),
                max: millis(max),
                mean: millis(mean),
            }),
            _ => None,
        };

        Self {
            byte_size: stats.byte_size,
            item_count: stats.item_count,
            stat_duration_ms: millis(stats.stat_duration),
            evictions: stats.evictions(),
            time_to_eviction_ms,
        }
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
