//! Remote generative-language service boundary
//!
//! Provides the request mapping, the wire client, and the error
//! taxonomy for talking to the Gemini `generateContent` endpoint.

mod error;
mod gemini;
#[cfg(test)]
mod proptests;
mod wire;

pub use error::{ChatError, ChatErrorKind};
pub use gemini::GeminiClient;
pub use wire::{to_remote_request, GenerateRequest};

use async_trait::async_trait;

/// Fixed text substituted when the service fails entirely.
pub const FALLBACK_TEXT: &str = "Sorry, something went wrong.";

/// Fixed text substituted when a well-formed reply carries no text.
pub const NO_RESPONSE_TEXT: &str = "No response";

/// Outcome of one exchange with the remote service.
///
/// Transport and decode failures are converged to [`Failure`] at this
/// boundary; the distinction is preserved internally for diagnostics
/// (logged, never shown to the user).
///
/// [`Failure`]: RemoteReply::Failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteReply {
    /// The first candidate carried text
    Success { text: String },
    /// Well-formed reply with no usable text
    Empty,
    /// Transport error, non-2xx status, or undecodable body
    Failure,
}

impl RemoteReply {
    /// The text a caller should append to the conversation: candidate
    /// text on success, a fixed sentinel otherwise.
    pub fn display_text(&self) -> &str {
        match self {
            RemoteReply::Success { text } => text,
            RemoteReply::Empty => NO_RESPONSE_TEXT,
            RemoteReply::Failure => FALLBACK_TEXT,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RemoteReply::Failure)
    }
}

/// Interface to the remote chat service.
///
/// Exactly one outbound call per `send` invocation; no retries, no
/// caching. Implementations must never panic on service misbehavior.
#[async_trait]
pub trait ChatService: Send + Sync {
    async fn send(&self, request: &GenerateRequest) -> RemoteReply;
}
