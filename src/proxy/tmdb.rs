//! TMDB Proxy
//!
//! Movie and TV metadata from The Movie Database.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;

use crate::api::AppState;
use crate::cache::cache_key;
use crate::error::{ProxyError, Result};
use crate::models::TmdbSearchParams;
use crate::proxy::fetch_cached;
use crate::sanitize::{sanitize_numeric_id, sanitize_page, sanitize_query, MediaType};

const SERVICE: &str = "TMDB";

fn api_key(state: &AppState) -> Result<String> {
    state
        .config
        .tmdb_api_key
        .clone()
        .ok_or(ProxyError::NotConfigured(SERVICE))
}

/// Handler for GET /api/tmdb/search
///
/// Searches movies (default) or TV shows by title.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<TmdbSearchParams>,
) -> Result<Json<Value>> {
    let api_key = api_key(&state)?;
    let media = MediaType::parse(params.media_type.as_deref().unwrap_or("movie"))?;
    let query = sanitize_query(&params.query)?;
    let page = sanitize_page(params.page)?.to_string();

    let key = cache_key("tmdb:search", &[media.as_tag(), query.as_str(), page.as_str()]);
    let url = format!("{}/search/{}", state.config.tmdb_base_url, media.as_path());

    let upstream = state.upstream.clone();
    let value = fetch_cached(&state.cache, key, async move {
        upstream
            .get_json(
                &url,
                &[
                    ("api_key", api_key.as_str()),
                    ("query", query.as_str()),
                    ("page", page.as_str()),
                    ("include_adult", "false"),
                ],
            )
            .await
    })
    .await?;

    Ok(Json(value))
}

/// Handler for GET /api/tmdb/details/:type/:id
///
/// Fetches one title with its credits.
pub async fn details_handler(
    State(state): State<AppState>,
    Path((media_type, id)): Path<(String, String)>,
) -> Result<Json<Value>> {
    let api_key = api_key(&state)?;
    let media = MediaType::parse(&media_type)?;
    let id = sanitize_numeric_id(&id)?;

    let key = cache_key("tmdb:details", &[media.as_tag(), id.as_str()]);
    let url = format!("{}/{}/{}", state.config.tmdb_base_url, media.as_path(), id);

    let upstream = state.upstream.clone();
    let value = fetch_cached(&state.cache, key, async move {
        upstream
            .get_json(
                &url,
                &[("api_key", api_key.as_str()), ("append_to_response", "credits")],
            )
            .await
    })
    .await?;

    Ok(Json(value))
}

/// Handler for GET /api/tmdb/trending/:type
pub async fn trending_handler(
    State(state): State<AppState>,
    Path(media_type): Path<String>,
) -> Result<Json<Value>> {
    let api_key = api_key(&state)?;
    let media = MediaType::parse(&media_type)?;

    let key = cache_key("tmdb:trending", &[media.as_tag()]);
    let url = format!("{}/trending/{}/week", state.config.tmdb_base_url, media.as_path());

    let upstream = state.upstream.clone();
    let value = fetch_cached(&state.cache, key, async move {
        upstream.get_json(&url, &[("api_key", api_key.as_str())]).await
    })
    .await?;

    Ok(Json(value))
}
