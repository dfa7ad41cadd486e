//! Response DTOs for the proxy API
//!
//! Defines the structure of outgoing HTTP response bodies. Proxied upstream
//! bodies are passed through as raw JSON and have no DTO here.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for `POST /api/ai/generate`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub text: String,
}

/// Response body for `GET /api/admin/status`
#[derive(Debug, Clone, Serialize)]
pub struct AdminStatusResponse {
    /// Whether an admin password has been set
    pub configured: bool,
}

/// Response body for `POST /api/admin/setup`
#[derive(Debug, Clone, Serialize)]
pub struct SetupResponse {
    pub message: String,
}

impl SetupResponse {
    pub fn created() -> Self {
        Self {
            message: "Admin password set successfully".to_string(),
        }
    }
}

/// Response body for `POST /api/admin/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub authenticated: bool,
}

/// Response body for the stats endpoint (GET /api/cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of oldest-entry evictions
    pub evictions: u64,
    /// Number of expired entries removed
    pub expired_removals: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Capacity of the cache
    pub max_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, max_entries: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expired_removals: stats.expired_removals,
            total_entries: stats.total_entries,
            max_entries,
            hit_rate: stats.hit_rate(),
        }
    }
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

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
