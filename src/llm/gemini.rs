//! Gemini HTTP client
//!
//! One outbound call per send, bounded by an explicit timeout. All
//! transport and decode failures converge to [`RemoteReply::Failure`]
//! here; the underlying cause is logged, never surfaced.

use super::wire::{GenerateRequest, GenerateResponse};
use super::{ChatError, ChatService, RemoteReply};
use crate::config::ChatConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    /// Build a client from injected configuration. Fails when no API
    /// key is configured or the HTTP client cannot be constructed.
    pub fn from_config(config: &ChatConfig) -> Result<Self, ChatError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ChatError::network("No API key configured (set GEMINI_API_KEY)"))?;
        Self::new(api_key, config.endpoint.as_deref(), config.request_timeout)
    }

    pub fn new(
        api_key: String,
        endpoint: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, ChatError> {
        let endpoint = endpoint
            .map(|e| e.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChatError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            endpoint,
        })
    }

    /// Single-attempt exchange. Errors carry the internal cause; the
    /// public [`ChatService::send`] wrapper folds them into a reply.
    async fn dispatch(&self, request: &GenerateRequest) -> Result<RemoteReply, ChatError> {
        // The credential rides as a query parameter, per the service
        // contract. It is injected, never baked into the source.
        let url = format!("{}?key={}", self.endpoint, self.api_key);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    ChatError::network(format!("Connection failed: {e}"))
                } else {
                    ChatError::network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::network(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(ChatError::http(
                status.as_u16(),
                format!("HTTP {status}: {body}"),
            ));
        }

        decode_reply(&body)
    }
}

#[async_trait]
impl ChatService for GeminiClient {
    async fn send(&self, request: &GenerateRequest) -> RemoteReply {
        let start = std::time::Instant::now();
        let result = self.dispatch(request).await;
        let duration = start.elapsed();

        match result {
            Ok(reply) => {
                tracing::info!(
                    duration_ms = %duration.as_millis(),
                    entries = request.contents.len(),
                    empty = matches!(reply, RemoteReply::Empty),
                    "Chat request completed"
                );
                reply
            }
            Err(e) => {
                tracing::error!(
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e,
                    "Chat request failed"
                );
                RemoteReply::Failure
            }
        }
    }
}

/// Decode a 2xx body. A malformed body is a [`ChatError::decode`]; a
/// well-formed body whose candidate chain carries no text is `Empty`.
fn decode_reply(body: &str) -> Result<RemoteReply, ChatError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| ChatError::decode(format!("Failed to parse response: {e}")))?;

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text);

    match text {
        Some(text) if !text.is_empty() => Ok(RemoteReply::Success { text }),
        _ => Ok(RemoteReply::Empty),
    }
}
