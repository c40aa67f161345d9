//! ember-chat - conversation core for a Gemini-backed chat client
//!
//! Maintains a linear message history, maps it to the service request
//! shape on every turn, performs the exchange with fixed fallback
//! semantics, and extracts text from uploaded PDFs so callers can feed
//! document content into the conversation.
//!
//! Presentation (rendering, input handling, theming) lives outside
//! this crate; the only entry points it needs are
//! [`MessageStore::append`], [`llm::to_remote_request`],
//! [`llm::ChatService::send`], and [`ingest::extract`].

pub mod config;
pub mod ingest;
pub mod llm;
pub mod session;
pub mod store;

pub use config::ChatConfig;
pub use ingest::{extract, ExtractedDocument, IngestError};
pub use llm::{ChatService, GeminiClient, RemoteReply};
pub use session::ChatSession;
pub use store::{MessageStore, Speaker, Turn};
