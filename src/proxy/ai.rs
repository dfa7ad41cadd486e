//! Generative AI Proxy
//!
//! Forwards a single prompt to a Gemini-style `generateContent` endpoint.
//! Generations are never cached.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::api::AppState;
use crate::error::{ProxyError, Result, UpstreamError};
use crate::models::{GenerateRequest, GenerateResponse};
use crate::proxy::detached;
use crate::sanitize::sanitize_prompt;

const SERVICE: &str = "AI service";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const MAX_OUTPUT_TOKENS: u32 = 4096;

/// Builds the `generateContent` body for one user turn.
pub fn build_request_body(prompt: &str, max_tokens: u32) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": {
            "temperature": 0.7,
            "maxOutputTokens": max_tokens
        }
    })
}

/// Joins the text parts of the first candidate, skipping thought parts.
pub fn extract_text(response: &Value) -> Option<String> {
    let parts = response["candidates"][0]["content"]["parts"].as_array()?;
    let text: String = parts
        .iter()
        .filter(|p| !p["thought"].as_bool().unwrap_or(false))
        .filter_map(|p| p["text"].as_str())
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Handler for POST /api/ai/generate
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    let api_key = state
        .config
        .ai_api_key
        .clone()
        .ok_or(ProxyError::NotConfigured(SERVICE))?;
    let prompt = sanitize_prompt(&req.prompt)?;
    let max_tokens = req
        .max_tokens
        .unwrap_or(DEFAULT_MAX_TOKENS)
        .clamp(1, MAX_OUTPUT_TOKENS);

    let url = format!(
        "{}/models/{}:generateContent",
        state.config.ai_base_url, state.config.ai_model
    );
    let body = build_request_body(&prompt, max_tokens);

    info!(
        model = %state.config.ai_model,
        prompt_chars = prompt.chars().count(),
        "generating text"
    );
    let upstream = state.upstream.clone();
    let response = detached(async move {
        upstream
            .post_json(&url, &[("key", api_key.as_str())], &body)
            .await
    })
    .await?;

    let text = extract_text(&response)
        .ok_or_else(|| UpstreamError::Decode("response has no candidate text".to_string()))?;

    Ok(Json(GenerateResponse { text }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_body() {
        let body = build_request_body("Summarize Dune", 256);
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Summarize Dune");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 256);
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello, " }, { "text": "world" }] }
            }]
        });
        assert_eq!(extract_text(&response).as_deref(), Some("Hello, world"));
    }

    #[test]
    fn test_extract_text_skips_thoughts() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "thinking...", "thought": true },
                    { "text": "answer" }
                ] }
            }]
        });
        assert_eq!(extract_text(&response).as_deref(), Some("answer"));
    }

    #[test]
    fn test_extract_text_none_without_candidates() {
        assert_eq!(extract_text(&json!({"candidates": []})), None);
        assert_eq!(extract_text(&json!({"error": "quota"})), None);
    }
}
