//! Proxy Module
//!
//! Handlers that forward browser requests to third-party APIs.
//!
//! # Endpoints
//! - `GET /api/tmdb/search` - Movie/TV search
//! - `GET /api/tmdb/details/:type/:id` - Movie/TV details
//! - `GET /api/tmdb/trending/:type` - Weekly trending titles
//! - `GET /api/rawg/search` - Game search
//! - `GET /api/rawg/details/:id` - Game details
//! - `GET /api/openlibrary/*path` - Book catalog pass-through
//! - `POST /api/ai/generate` - Generative text (not cached)

pub mod ai;
pub mod openlibrary;
pub mod rawg;
pub mod tmdb;

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::CacheStore;
use crate::error::UpstreamError;

/// Cache store shared by all handlers.
pub type SharedCache = Arc<RwLock<CacheStore>>;

/// Returns the cached value for `key`, or awaits `fetch` and caches its result.
///
/// A miss runs on its own task, so the fetch and the cache write finish even
/// if the caller is dropped. Failed fetches leave the cache untouched. The
/// lock is not held while `fetch` runs, so concurrent misses on one key each
/// call upstream.
pub async fn fetch_cached<F>(cache: &SharedCache, key: String, fetch: F) -> Result<Value, UpstreamError>
where
    F: Future<Output = Result<Value, UpstreamError>> + Send + 'static,
{
    let cached = cache.write().await.get(&key);
    if let Some(value) = cached {
        return Ok(value);
    }

    debug!(%key, "cache miss");
    detached(fill(Arc::clone(cache), key, fetch)).await
}

/// Runs an upstream call on its own task so it outlives a dropped caller.
pub async fn detached<F>(call: F) -> Result<Value, UpstreamError>
where
    F: Future<Output = Result<Value, UpstreamError>> + Send + 'static,
{
    tokio::spawn(call)
        .await
        .map_err(|e| UpstreamError::Transport(format!("upstream task failed: {e}")))?
}

async fn fill<F>(cache: SharedCache, key: String, fetch: F) -> Result<Value, UpstreamError>
where
    F: Future<Output = Result<Value, UpstreamError>>,
{
    let value = fetch.await?;
    cache.write().await.set(key, value.clone());
    Ok(value)
}
