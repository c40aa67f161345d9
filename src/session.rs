//! Conversation session orchestration
//!
//! Ties the store to the service: each submitted message appends one
//! user turn, maps the full history, performs one exchange, and
//! appends exactly one assistant turn regardless of outcome.

use crate::llm::{to_remote_request, ChatService};
use crate::store::{MessageStore, Speaker, Turn};
use std::sync::Arc;

/// One conversation bound to a chat backend.
///
/// At most one exchange may be in flight per conversation; the
/// exclusive borrow taken by [`submit`] is the guard, so a second
/// submit cannot start while an earlier one is pending.
///
/// [`submit`]: ChatSession::submit
pub struct ChatSession {
    store: MessageStore,
    service: Arc<dyn ChatService>,
}

impl ChatSession {
    pub fn new(service: Arc<dyn ChatService>) -> Self {
        Self {
            store: MessageStore::new(),
            service,
        }
    }

    /// Submit a user message and wait for the assistant turn.
    ///
    /// Empty or whitespace-only input is a no-op returning `None` and
    /// issues no network call. Otherwise the returned turn is the
    /// assistant reply just committed: candidate text on success, a
    /// fixed sentinel on an empty or failed exchange.
    pub async fn submit(&mut self, text: impl Into<String>) -> Option<Turn> {
        self.store.append(Speaker::User, text)?;

        let request = to_remote_request(self.store.all());
        let reply = self.service.send(&request).await;

        if reply.is_failure() {
            tracing::warn!("Falling back to the fixed error reply");
        }

        // Exactly one assistant turn per submit. The sentinel texts
        // are non-empty, so this append cannot be rejected.
        self.store
            .append(Speaker::Assistant, reply.display_text())
    }

    /// Conversation history in order.
    pub fn turns(&self) -> &[Turn] {
        self.store.all()
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MessageStore {
        &mut self.store
    }
}
