//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache and its HTTP front end.
///
/// Only [`CacheError::TooLarge`] is produced by the cache itself; a lookup
/// miss in the cache is an `Option::None`, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The entry does not fit even after evicting every other entry
    #[error("cannot fit {size} bytes in cache (max size {max_size} bytes)")]
    TooLarge { size: usize, max_size: usize },

    /// Key not found in cache (HTTP layer)
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data (HTTP layer)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_large_message() {
        let err = CacheError::TooLarge {
            size: 2_000_000,
            max_size: 1_000_000,
        };
        assert_eq!(
            err.to_string(),
            "cannot fit 2000000 bytes in cache (max size 1000000 bytes)"
        );
    }

    #[test]
    fn test_status_codes() {
        let too_large = CacheError::TooLarge {
            size: 10,
            max_size: 5,
        };
        assert_eq!(
            too_large.into_response().status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            CacheError::NotFound("k".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CacheError::InvalidRequest("bad".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
