//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::api::MAX_KEY_LENGTH;
use crate::cache::{CacheItem, LruCache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{CachedBody, HealthResponse, PutResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The cache serializes access internally, so it is shared with a plain Arc.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<LruCache<CachedBody>>,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: LruCache<CachedBody>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(LruCache::new(config.max_size, config.max_age()))
    }
}

/// Handler for PUT /cache/:key
///
/// Stores the raw request body and its content type under the key.
pub async fn put_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<PutResponse>> {
    validate_key(&key)?;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let item = CachedBody::new(content_type, body);
    let size = item.byte_size();

    if let Err(err) = state.cache.put(key.clone(), item) {
        warn!(key = %key, "not cached: {}", err);
        return Err(err);
    }

    Ok(Json(PutResponse::new(key, size)))
}

/// Handler for GET /cache/:key
///
/// Returns the stored body with its original content type.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response> {
    let item = state
        .cache
        .get(&key)
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    let mut response = item.data.clone().into_response();
    if let Some(value) = item
        .content_type
        .as_deref()
        .and_then(|ct| HeaderValue::from_str(ct).ok())
    {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }

    Ok(response)
}

/// Handler for GET /stats
///
/// Returns statistics since the previous call and starts a new period.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats();
    Json(StatsResponse::from(&stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidRequest("Key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidRequest(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_state() -> AppState {
        AppState::new(LruCache::new(1_000_000, Duration::ZERO))
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers
    }

    #[tokio::test]
    async fn test_put_and_get_handler() {
        let state = test_state();

        let result = put_handler(
            State(state.clone()),
            Path("test_key".to_string()),
            json_headers(),
            Bytes::from_static(br#"{"a":1}"#),
        )
        .await;
        let response = result.unwrap();
        assert_eq!(response.key, "test_key");
        assert_eq!(response.size, 7 + "application/json".len());

        let response = get_handler(State(state), Path("test_key".to_string()))
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = test_state();

        let result = get_handler(State(state), Path("nonexistent".to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_put_too_large() {
        let state = test_state();

        let result = put_handler(
            State(state.clone()),
            Path("big".to_string()),
            HeaderMap::new(),
            Bytes::from(vec![0u8; 2_000_000]),
        )
        .await;

        assert!(matches!(result, Err(CacheError::TooLarge { .. })));
        assert!(state.cache.is_empty());
    }

    #[tokio::test]
    async fn test_put_key_too_long() {
        let state = test_state();

        let result = put_handler(
            State(state),
            Path("x".repeat(MAX_KEY_LENGTH + 1)),
            HeaderMap::new(),
            Bytes::from_static(b"v"),
        )
        .await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_stats_handler_drains() {
        let state = test_state();
        for body in ["one", "two"] {
            put_handler(
                State(state.clone()),
                Path("k".to_string()),
                HeaderMap::new(),
                Bytes::from_static(body.as_bytes()),
            )
            .await
            .unwrap();
        }

        let first = stats_handler(State(state.clone())).await;
        assert_eq!(first.item_count, 1);
        assert_eq!(first.evictions, 1);

        let second = stats_handler(State(state)).await;
        assert_eq!(second.evictions, 0);
        assert!(second.time_to_eviction_ms.is_none());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
