//! OpenLibrary Proxy
//!
//! Pass-through to a fixed set of OpenLibrary JSON endpoints. No API key.

use axum::{
    extract::{Path, RawQuery, State},
    Json,
};
use serde_json::Value;
use url::form_urlencoded;

use crate::api::AppState;
use crate::cache::cache_key;
use crate::error::Result;
use crate::proxy::fetch_cached;
use crate::sanitize::{sanitize_ol_path, sanitize_raw_query};

/// Re-encodes a query string with its pairs sorted, so parameter order does
/// not split the cache.
fn canonical_query(raw: &str) -> String {
    let mut pairs: Vec<(String, String)> = form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect();
    pairs.sort();

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Handler for GET /api/openlibrary/*path
///
/// The query string is forwarded verbatim; its sorted pairs are part of the
/// cache key.
pub async fn passthrough_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>> {
    let path = sanitize_ol_path(&path)?;
    let query = sanitize_raw_query(query.as_deref())?;

    let (target, key) = match &query {
        Some(q) => (
            format!("{}?{}", path, q),
            cache_key("ol", &[format!("{}?{}", path, canonical_query(q)).as_str()]),
        ),
        None => (path.clone(), cache_key("ol", &[path.as_str()])),
    };
    let url = format!("{}/{}", state.config.openlibrary_base_url, target);

    let upstream = state.upstream.clone();
    let value = fetch_cached(&state.cache, key, async move {
        upstream.get_json(&url, &[]).await
    })
    .await?;

    Ok(Json(value))
}
