//! Gemini `generateContent` wire types and request mapping
//!
//! The request side is rebuilt in full from the conversation on every
//! turn; there is no incremental diffing. Mapping is pure and
//! deterministic: the same history always serializes to identical
//! bytes.

use crate::store::{Speaker, Turn};
use serde::{Deserialize, Serialize};

/// Map the full conversation into the service request shape.
///
/// Every turn becomes exactly one `contents` entry, text copied
/// verbatim. The response format and tool set are static
/// configuration, not derived from the history. An empty conversation
/// maps to zero entries; callers must append the pending user turn
/// before mapping.
pub fn to_remote_request(turns: &[Turn]) -> GenerateRequest {
    let contents = turns
        .iter()
        .map(|turn| Content {
            role: match turn.speaker {
                Speaker::User => Role::User,
                Speaker::Assistant => Role::Model,
            },
            parts: vec![Part {
                text: turn.text.clone(),
            }],
        })
        .collect();

    GenerateRequest {
        contents,
        generation_config: GenerationConfig {
            response_mime_type: "text/plain".to_string(),
        },
        tools: vec![Tool {
            google_search: GoogleSearch {},
        }],
    }
}

// Request types

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoogleSearch {}

// Response types

#[derive(Debug, Deserialize)]
pub(super) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}
