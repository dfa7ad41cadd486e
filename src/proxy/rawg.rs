//! RAWG Proxy
//!
//! Video-game metadata from the RAWG database.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;

use crate::api::AppState;
use crate::cache::cache_key;
use crate::error::{ProxyError, Result};
use crate::models::RawgSearchParams;
use crate::proxy::fetch_cached;
use crate::sanitize::{sanitize_page, sanitize_query, sanitize_slug};

const SERVICE: &str = "RAWG";
const PAGE_SIZE: &str = "20";

fn api_key(state: &AppState) -> Result<String> {
    state
        .config
        .rawg_api_key
        .clone()
        .ok_or(ProxyError::NotConfigured(SERVICE))
}

/// Handler for GET /api/rawg/search
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<RawgSearchParams>,
) -> Result<Json<Value>> {
    let api_key = api_key(&state)?;
    let query = sanitize_query(&params.query)?;
    let page = sanitize_page(params.page)?.to_string();

    let key = cache_key("rawg:search", &[query.as_str(), page.as_str()]);
    let url = format!("{}/games", state.config.rawg_base_url);

    let upstream = state.upstream.clone();
    let value = fetch_cached(&state.cache, key, async move {
        upstream
            .get_json(
                &url,
                &[
                    ("key", api_key.as_str()),
                    ("search", query.as_str()),
                    ("page", page.as_str()),
                    ("page_size", PAGE_SIZE),
                ],
            )
            .await
    })
    .await?;

    Ok(Json(value))
}

/// Handler for GET /api/rawg/details/:id
///
/// Accepts a numeric id or a slug.
pub async fn details_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let api_key = api_key(&state)?;
    let id = sanitize_slug(&id)?;

    let key = cache_key("rawg:details", &[id.as_str()]);
    let url = format!("{}/games/{}", state.config.rawg_base_url, id);

    let upstream = state.upstream.clone();
    let value = fetch_cached(&state.cache, key, async move {
        upstream.get_json(&url, &[("key", api_key.as_str())]).await
    })
    .await?;

    Ok(Json(value))
}
