//! Configuration Module
//!
//! Handles loading and managing server configuration from environment
//! variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Background cache cleanup interval in seconds
    pub cleanup_interval: u64,
    /// Shared token gating admin endpoints
    pub admin_token: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cache cleanup frequency in seconds (default: 60)
    /// - `ADMIN_TOKEN` - Admin token (default: "change-me")
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "change-me".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cleanup_interval: 60,
            admin_token: "change-me".to_string(),
        }
    }
}
