//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Byte budget of the cache (raised to the cache minimum if smaller)
    pub max_size: usize,
    /// Maximum entry age in milliseconds, 0 disables expiry
    pub max_age_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_SIZE` - Cache byte budget (default: 100000000)
    /// - `MAX_AGE_MS` - Max entry age in milliseconds, 0 = never (default: 0)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_size: env_or("MAX_SIZE", defaults.max_size),
            max_age_ms: env_or("MAX_AGE_MS", defaults.max_age_ms),
            server_port: env_or("SERVER_PORT", defaults.server_port),
        }
    }

    /// Max age as a Duration; zero means no expiry.
    pub fn max_age(&self) -> Duration {
        Duration::from_millis(self.max_age_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: 100_000_000,
            max_age_ms: 0,
            server_port: 3000,
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
