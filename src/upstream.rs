//! Upstream Client
//!
//! Outbound JSON calls to third-party APIs, each bounded by a fixed timeout.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde_json::Value;
use tracing::debug;

use crate::error::UpstreamError;

/// Query parameters appended to an upstream URL.
pub type QueryParams<'a> = &'a [(&'a str, &'a str)];

// == Upstream Client ==
/// Shared HTTP client for all proxied APIs.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            timeout,
        }
    }

    /// GETs `url` and parses the body as JSON.
    pub async fn get_json(&self, url: &str, query: QueryParams<'_>) -> Result<Value, UpstreamError> {
        debug!(url, "upstream GET");
        self.execute(self.http.get(url).query(query)).await
    }

    /// POSTs `body` as JSON to `url` and parses the response body as JSON.
    pub async fn post_json(
        &self,
        url: &str,
        query: QueryParams<'_>,
        body: &Value,
    ) -> Result<Value, UpstreamError> {
        debug!(url, "upstream POST");
        self.execute(self.http.post(url).query(query).json(body))
            .await
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Value, UpstreamError> {
        match tokio::time::timeout(self.timeout, send(request)).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout(self.timeout)),
        }
    }
}

// URLs carry API keys, so reqwest errors are stripped of them.
async fn send(request: RequestBuilder) -> Result<Value, UpstreamError> {
    let response = request
        .send()
        .await
        .map_err(|e| UpstreamError::Transport(e.without_url().to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status(status.as_u16()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| UpstreamError::Decode(e.without_url().to_string()))
}
