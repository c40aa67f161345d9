//! Chat service error types

use thiserror::Error;

/// Internal error raised while exchanging with the remote service.
///
/// These never reach the user; the client boundary converges them to a
/// single fallback reply and logs the detail.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ChatError {
    pub kind: ChatErrorKind,
    pub message: String,
}

impl ChatError {
    pub fn new(kind: ChatErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Network, message)
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::new(
            ChatErrorKind::Http { status },
            message,
        )
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Decode, message)
    }
}

/// Failure classification, kept for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatErrorKind {
    /// Connection failure or timeout before a response arrived
    Network,
    /// The service answered with a non-2xx status
    Http { status: u16 },
    /// The body could not be parsed as the expected reply shape
    Decode,
}

impl ChatErrorKind {
    /// Transport-level failures, as opposed to decode failures.
    pub fn is_transport(self) -> bool {
        matches!(self, ChatErrorKind::Network | ChatErrorKind::Http { .. })
    }
}
