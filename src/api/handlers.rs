//! API Handlers
//!
//! Shared application state plus the operational endpoints.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::State, Json};

use crate::admin::{AdminAuth, InMemoryPasswordStore, PasswordStore};
use crate::cache::CacheStore;
use crate::config::Config;
use crate::models::{HealthResponse, StatsResponse};
use crate::proxy::SharedCache;
use crate::upstream::UpstreamClient;

/// Application state shared across all handlers.
///
/// Built once at startup; the cache lives exactly as long as the server.
#[derive(Clone)]
pub struct AppState {
    /// Response cache behind one coarse lock
    pub cache: SharedCache,
    /// Outbound HTTP client
    pub upstream: UpstreamClient,
    /// Upstream endpoints and API keys
    pub config: Arc<Config>,
    /// Admin password checks
    pub admin: AdminAuth,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(config: Config, cache: CacheStore, passwords: Arc<dyn PasswordStore>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            upstream: UpstreamClient::new(config.upstream_timeout()),
            admin: AdminAuth::new(passwords, config.admin_bcrypt_cost),
            config: Arc::new(config),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses a fresh cache on the system clock and an in-memory password
    /// store seeded from `ADMIN_PASSWORD_HASH`.
    pub fn from_config(config: &Config) -> Self {
        let passwords = Arc::new(InMemoryPasswordStore::new(
            config.admin_password_hash.clone(),
        ));
        Self::new(config.clone(), CacheStore::new(), passwords)
    }
}

/// Handler for GET /api/cache/stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(&cache.stats(), cache.max_entries()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
