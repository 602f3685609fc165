//! Wire types for both sides of the gateway.
//!
//! The inbound side is the tiny `{"prompt"}` / `{"blueprint"}` contract the
//! anstruct CLI speaks. The outbound side is the subset of the Gemini
//! `generateContent` request we send.

use serde::{Deserialize, Serialize};

/// Framing instruction sent ahead of every caller prompt.
pub const BLUEPRINT_INSTRUCTION: &str = "You are a project structure generator. Return ONLY a tab-indented blueprint of the project structure, no explanations.";

/// Role tag used for both outbound entries.
pub const USER_ROLE: &str = "user";

// =============================================================================
// Inbound
// =============================================================================

/// Body accepted by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

/// Body returned by the gateway on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintResponse {
    pub blueprint: String,
}

// =============================================================================
// Outbound (Gemini)
// =============================================================================

/// A single text part of a content entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// One entry of the `contents` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    /// A user-role entry holding a single text part.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: USER_ROLE.to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Build the two-entry payload: instruction first, caller prompt second.
    pub fn blueprint(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![
                Content::user_text(BLUEPRINT_INSTRUCTION),
                Content::user_text(prompt),
            ],
        }
    }
}
