//! Core types: chat messages and the endpoint's wire format

use serde::{Deserialize, Serialize};

/// Who sent a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Ai => "ai",
        }
    }
}

/// A single message in the conversation.
///
/// Messages never change after creation, so fields are only reachable
/// through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    role: Role,
    content: String,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an ai message
    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: Role::Ai,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Request body sent to the chat endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Response body returned by the chat endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    /// Missing field means no new messages
    #[serde(default)]
    pub responses: Vec<String>,
}

/// Error body the endpoint sends with a non-success status
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
