//! Message types for the conversation history.
//!
//! Roles: System (agent instructions, placed first when an agent runs), User, Assistant.
//! `TutorState::messages` holds User and Assistant turns; agents prepend their own System
//! message per invocation and never store it in the shared history.

use serde::{Deserialize, Serialize};

/// A single message in the conversation.
///
/// Tool observations are recorded as User messages (`"Tool <name> returned: ..."`), so the
/// history stays three-role and any chat backend can consume it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "content", rename_all = "lowercase")]
pub enum Message {
    /// Agent instructions.
    System(String),
    /// Learner input or tool observation.
    User(String),
    /// Agent reply.
    Assistant(String),
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant(content.into())
    }

    /// Text content regardless of role.
    pub fn content(&self) -> &str {
        match self {
            Message::System(s) | Message::User(s) | Message::Assistant(s) => s,
        }
    }
}
