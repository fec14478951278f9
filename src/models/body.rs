//! Cached HTTP body
//!
//! The item type stored by the cache server.

use axum::body::Bytes;

use crate::cache::CacheItem;

/// A request body stored under a key, with the content type it was sent with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedBody {
    /// `Content-Type` of the original request, if any
    pub content_type: Option<String>,
    /// Raw body bytes
    pub data: Bytes,
}

impl CachedBody {
    pub fn new(content_type: Option<String>, data: Bytes) -> Self {
        Self { content_type, data }
    }
}

impl CacheItem for CachedBody {
    fn byte_size(&self) -> usize {
        self.data.len() + self.content_type.as_ref().map_or(0, String::len)
    }
}
