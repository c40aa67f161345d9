//! Environment-sourced configuration
//!
//! The API key is an opaque credential injected at runtime; it is
//! never hard-coded and never logged.

use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the chat backend.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Gemini API key (`GEMINI_API_KEY`)
    pub api_key: Option<String>,
    /// Endpoint override, e.g. a local gateway (`GEMINI_ENDPOINT`)
    pub endpoint: Option<String>,
    /// Upper bound on one outbound exchange
    pub request_timeout: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ChatConfig {
    pub fn from_env() -> Self {
        let request_timeout = std::env::var("EMBER_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            endpoint: std::env::var("GEMINI_ENDPOINT").ok().filter(|e| !e.is_empty()),
            request_timeout,
        }
    }
}
