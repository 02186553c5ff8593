//! Message types for chat-model conversations
//!
//! These are the framework-facing types: callers build an ordered history of
//! [`ChatMessage`] values and hand it to an adapter, which translates them
//! into whatever wire format the provider expects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message role in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// End-user turn
    Human,
    /// Model turn
    Ai,
    /// System-level directive, kept out of the conversational turns
    System,
    /// Free-form message kind outside the chat turn taxonomy
    Generic,
}

/// A single message in the conversation
///
/// Owned by the caller; adapters only read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
}

impl ChatMessage {
    /// Create a new human message
    #[must_use]
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: Role::Human,
            content: content.into(),
            uuid: Some(Uuid::new_v4()),
        }
    }

    /// Create a new AI message
    #[must_use]
    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: Role::Ai,
            content: content.into(),
            uuid: Some(Uuid::new_v4()),
        }
    }

    /// Create a new system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            uuid: None,
        }
    }

    /// Create a new generic message
    #[must_use]
    pub fn generic(content: impl Into<String>) -> Self {
        Self {
            role: Role::Generic,
            content: content.into(),
            uuid: None,
        }
    }
}
