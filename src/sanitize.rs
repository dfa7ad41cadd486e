//! Input Sanitization
//!
//! Cleans and validates browser-supplied values before they reach an
//! upstream URL or a cache key.

use crate::error::{ProxyError, Result};

pub const MAX_QUERY_LEN: usize = 200;
pub const MAX_PROMPT_LEN: usize = 4000;
pub const MAX_PAGE: u32 = 500;
pub const MAX_OL_QUERY_LEN: usize = 500;

/// OpenLibrary endpoints the proxy forwards to.
pub const OPENLIBRARY_PREFIXES: &[&str] = &[
    "search.json",
    "works/",
    "books/",
    "authors/",
    "isbn/",
    "subjects/",
];

// == Media Type ==
/// TMDB catalogue a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    /// Parses `movie` or `tv`, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "movie" => Ok(MediaType::Movie),
            "tv" => Ok(MediaType::Tv),
            other => Err(ProxyError::InvalidRequest(format!(
                "unsupported media type '{}'",
                other
            ))),
        }
    }

    /// URL path segment.
    pub fn as_path(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }

    /// Cache key tag.
    pub fn as_tag(&self) -> &'static str {
        match self {
            MediaType::Movie => "MOVIE",
            MediaType::Tv => "TV",
        }
    }
}

/// Trims a search query, drops control characters and collapses whitespace.
pub fn sanitize_query(raw: &str) -> Result<String> {
    let cleaned = raw
        .split_whitespace()
        .map(|word| word.chars().filter(|c| !c.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if cleaned.is_empty() {
        return Err(ProxyError::InvalidRequest(
            "query must not be empty".to_string(),
        ));
    }
    if cleaned.chars().count() > MAX_QUERY_LEN {
        return Err(ProxyError::InvalidRequest(format!(
            "query exceeds maximum length of {} characters",
            MAX_QUERY_LEN
        )));
    }
    Ok(cleaned)
}

/// Accepts a purely numeric identifier (TMDB ids).
pub fn sanitize_numeric_id(raw: &str) -> Result<String> {
    let id = raw.trim();
    if id.is_empty() || id.len() > 12 || !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(ProxyError::InvalidRequest(format!("invalid id '{}'", id)));
    }
    Ok(id.to_string())
}

/// Accepts an id or slug made of letters, digits and hyphens (RAWG ids).
pub fn sanitize_slug(raw: &str) -> Result<String> {
    let slug = raw.trim();
    let valid = !slug.is_empty()
        && slug.len() <= 100
        && slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !valid {
        return Err(ProxyError::InvalidRequest(format!("invalid id '{}'", slug)));
    }
    Ok(slug.to_string())
}

/// Defaults a missing page to 1 and bounds it to `1..=MAX_PAGE`.
pub fn sanitize_page(page: Option<u32>) -> Result<u32> {
    match page {
        None => Ok(1),
        Some(p) if (1..=MAX_PAGE).contains(&p) => Ok(p),
        Some(p) => Err(ProxyError::InvalidRequest(format!(
            "page {} is out of range 1..={}",
            p, MAX_PAGE
        ))),
    }
}

/// Validates an OpenLibrary path against the forwarded endpoints.
pub fn sanitize_ol_path(raw: &str) -> Result<String> {
    let path = raw.trim().trim_start_matches('/');

    let charset_ok = path
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '.' | '-'));
    if path.is_empty() || !charset_ok || path.contains("..") || path.contains("//") {
        return Err(ProxyError::InvalidRequest(format!(
            "invalid OpenLibrary path '{}'",
            raw
        )));
    }
    if !OPENLIBRARY_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return Err(ProxyError::InvalidRequest(format!(
            "OpenLibrary path '{}' is not allowed",
            path
        )));
    }
    Ok(path.to_string())
}

/// Validates a raw query string forwarded verbatim to OpenLibrary.
pub fn sanitize_raw_query(raw: Option<&str>) -> Result<Option<String>> {
    let query = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(q) => q,
    };
    if query.len() > MAX_OL_QUERY_LEN {
        return Err(ProxyError::InvalidRequest(format!(
            "query string exceeds maximum length of {} characters",
            MAX_OL_QUERY_LEN
        )));
    }
    if query.chars().any(|c| c.is_control() || c.is_whitespace() || c == '#') {
        return Err(ProxyError::InvalidRequest(
            "query string contains invalid characters".to_string(),
        ));
    }
    Ok(Some(query.to_string()))
}

/// Trims a generation prompt and bounds its length.
pub fn sanitize_prompt(raw: &str) -> Result<String> {
    let prompt = raw.trim();
    if prompt.is_empty() {
        return Err(ProxyError::InvalidRequest(
            "prompt must not be empty".to_string(),
        ));
    }
    if prompt.chars().count() > MAX_PROMPT_LEN {
        return Err(ProxyError::InvalidRequest(format!(
            "prompt exceeds maximum length of {} characters",
            MAX_PROMPT_LEN
        )));
    }
    Ok(prompt.to_string())
}
