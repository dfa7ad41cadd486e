//! API Routes
//!
//! Configures the Axum router with all proxy server endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, stats_handler, AppState};
use crate::admin::handlers as admin;
use crate::proxy::{ai, openlibrary, rawg, tmdb};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/tmdb/search", get(tmdb::search_handler))
        .route("/api/tmdb/details/:media_type/:id", get(tmdb::details_handler))
        .route("/api/tmdb/trending/:media_type", get(tmdb::trending_handler))
        .route("/api/rawg/search", get(rawg::search_handler))
        .route("/api/rawg/details/:id", get(rawg::details_handler))
        .route("/api/openlibrary/*path", get(openlibrary::passthrough_handler))
        .route("/api/ai/generate", post(ai::generate_handler))
        .route("/api/admin/status", get(admin::status_handler))
        .route("/api/admin/setup", post(admin::setup_handler))
        .route("/api/admin/login", post(admin::login_handler))
        .route("/api/cache/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
