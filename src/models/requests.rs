//! Request DTOs for the proxy API
//!
//! Defines the structure of incoming query strings and JSON bodies.

use serde::Deserialize;

/// Query string for `GET /api/tmdb/search`
///
/// # Fields
/// - `query`: Search text
/// - `type`: `movie` (default) or `tv`
/// - `page`: Optional result page, 1-based
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbSearchParams {
    #[serde(default)]
    pub query: String,
    #[serde(default, rename = "type")]
    pub media_type: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
}

/// Query string for `GET /api/rawg/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawgSearchParams {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub page: Option<u32>,
}

/// Request body for `POST /api/ai/generate`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// Text prompt sent to the model
    pub prompt: String,
    /// Optional cap on generated tokens
    #[serde(default, alias = "maxTokens")]
    pub max_tokens: Option<u32>,
}

/// Request body for admin setup and login
#[derive(Clone, Deserialize)]
pub struct PasswordRequest {
    pub password: String,
}

// Keeps passwords out of logs.
impl std::fmt::Debug for PasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordRequest")
            .field("password", &"[REDACTED]")
            .finish()
    }
}
