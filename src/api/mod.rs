//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `PUT /cache/:key` - Store the request body under a key
//! - `GET /cache/:key` - Retrieve a stored body
//! - `GET /stats` - Drain cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
