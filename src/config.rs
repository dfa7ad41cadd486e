//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_RAWG_BASE_URL: &str = "https://api.rawg.io/api";
pub const DEFAULT_OPENLIBRARY_BASE_URL: &str = "https://openlibrary.org";
pub const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_AI_MODEL: &str = "gemini-1.5-flash";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// API keys left unset disable the matching proxy.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Timeout for every outbound call, in seconds
    pub upstream_timeout_secs: u64,
    pub tmdb_api_key: Option<String>,
    pub tmdb_base_url: String,
    pub rawg_api_key: Option<String>,
    pub rawg_base_url: String,
    pub openlibrary_base_url: String,
    pub ai_api_key: Option<String>,
    pub ai_base_url: String,
    pub ai_model: String,
    /// bcrypt hash seeding the admin password store
    pub admin_password_hash: Option<String>,
    /// bcrypt cost for newly set admin passwords
    pub admin_bcrypt_cost: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `UPSTREAM_TIMEOUT_SECS` - Outbound call timeout (default: 10)
    /// - `TMDB_API_KEY`, `TMDB_BASE_URL`
    /// - `RAWG_API_KEY`, `RAWG_BASE_URL`
    /// - `OPENLIBRARY_BASE_URL`
    /// - `AI_API_KEY`, `AI_BASE_URL`, `AI_MODEL`
    /// - `ADMIN_PASSWORD_HASH` - bcrypt hash of the admin password
    /// - `ADMIN_BCRYPT_COST` - bcrypt cost for new passwords (default: 12)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.upstream_timeout_secs),
            tmdb_api_key: non_empty_var("TMDB_API_KEY"),
            tmdb_base_url: base_url_var("TMDB_BASE_URL", defaults.tmdb_base_url),
            rawg_api_key: non_empty_var("RAWG_API_KEY"),
            rawg_base_url: base_url_var("RAWG_BASE_URL", defaults.rawg_base_url),
            openlibrary_base_url: base_url_var(
                "OPENLIBRARY_BASE_URL",
                defaults.openlibrary_base_url,
            ),
            ai_api_key: non_empty_var("AI_API_KEY"),
            ai_base_url: base_url_var("AI_BASE_URL", defaults.ai_base_url),
            ai_model: non_empty_var("AI_MODEL").unwrap_or(defaults.ai_model),
            admin_password_hash: non_empty_var("ADMIN_PASSWORD_HASH"),
            admin_bcrypt_cost: env::var("ADMIN_BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.admin_bcrypt_cost),
        }
    }

    /// Outbound timeout as a Duration.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            upstream_timeout_secs: 10,
            tmdb_api_key: None,
            tmdb_base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            rawg_api_key: None,
            rawg_base_url: DEFAULT_RAWG_BASE_URL.to_string(),
            openlibrary_base_url: DEFAULT_OPENLIBRARY_BASE_URL.to_string(),
            ai_api_key: None,
            ai_base_url: DEFAULT_AI_BASE_URL.to_string(),
            ai_model: DEFAULT_AI_MODEL.to_string(),
            admin_password_hash: None,
            admin_bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn base_url_var(name: &str, default: String) -> String {
    non_empty_var(name)
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or(default)
}
