//! Models for the cache server API
//!
//! Defines the cached HTTP body and the JSON response bodies.

pub mod body;
pub mod responses;

// Re-export commonly used types
pub use body::CachedBody;
pub use responses::{HealthResponse, PutResponse, StatsResponse, TimeToEvictionSummary};
