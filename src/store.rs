//! Conversation message store
//!
//! Append-only log of conversation turns. This is the single source of
//! truth for both rendering and request construction; everything else
//! reads it through [`MessageStore::all`].

use serde::{Deserialize, Serialize};

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

/// One utterance in the conversation. Immutable once committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Strictly increasing across the life of the store
    pub id: u64,
    pub speaker: Speaker,
    pub text: String,
}

/// Ordered, append-only conversation history.
///
/// Turns are never reordered or deleted individually; [`reset`] is the
/// only way to drop history, and ids keep counting past it so an id is
/// never reused.
///
/// [`reset`]: MessageStore::reset
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    turns: Vec<Turn>,
    next_id: u64,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn. Empty or whitespace-only text is rejected as a
    /// no-op and `None` is returned; otherwise the committed turn is
    /// returned with a freshly minted id.
    pub fn append(&mut self, speaker: Speaker, text: impl Into<String>) -> Option<Turn> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        self.next_id += 1;
        let turn = Turn {
            id: self.next_id,
            speaker,
            text,
        };
        self.turns.push(turn.clone());
        Some(turn)
    }

    /// Read-only view of the history, in append order.
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Clear all turns. Used only at session boundaries.
    pub fn reset(&mut self) {
        self.turns.clear();
    }
}
