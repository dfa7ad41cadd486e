//! Error types for the proxy server
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;

use crate::models::ErrorResponse;

// == Upstream Error Enum ==
/// Failure of an outbound call to a third-party API.
///
/// Detail is logged but never shown to the browser.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// No response within the outbound timeout
    #[error("upstream timed out after {0:?}")]
    Timeout(Duration),

    /// Connection, TLS, or task failure
    #[error("upstream transport error: {0}")]
    Transport(String),

    /// Non-2xx status
    #[error("upstream returned status {0}")]
    Status(u16),

    /// Body was not the JSON we expected
    #[error("invalid upstream response: {0}")]
    Decode(String),
}

// == Proxy Error Enum ==
/// Unified error type for the proxy server.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Missing or wrong admin credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Request conflicts with current state
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Upstream service has no API key configured
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// Outbound call failed
    #[error("Upstream request failed")]
    Upstream(#[from] UpstreamError),

    /// Internal server error; the detail is logged, never returned
    #[error("Internal error")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ProxyError::Conflict(_) => StatusCode::CONFLICT,
            ProxyError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            ProxyError::Upstream(err) => {
                warn!(error = %err, "upstream call failed");
                StatusCode::BAD_GATEWAY
            }
            ProxyError::Internal(detail) => {
                warn!(%detail, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the proxy server.
pub type Result<T> = std::result::Result<T, ProxyError>;
