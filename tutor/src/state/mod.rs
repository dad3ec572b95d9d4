//! Conversation state shared by the tutor graph, plus the per-agent ReAct state.
//!
//! [`TutorState`] is the single record threaded through a session: message history and the
//! `current_agent` pointer. [`ReActState`] is local to one agent invocation (think → act →
//! observe) and never outlives it; a [`TransferRequest`] raised inside it is how an agent
//! asks the parent graph to switch agents.

mod agent_id;

pub use agent_id::{AgentId, AgentIdError};

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Shared session state: ordered history and the agent that handles the next step.
///
/// `current_agent == None` means the classification agent. The field only ever holds one
/// of the four [`AgentId`] values; deserializing an unknown name fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TutorState {
    /// User and Assistant turns, oldest first. Append-only.
    pub messages: Vec<Message>,
    /// Agent for the next step; absent at session start.
    #[serde(default)]
    pub current_agent: Option<AgentId>,
}

impl TutorState {
    /// Fresh session state: no messages, no explicit agent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a learner message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::User(content.into()));
    }

    /// Returns the content of the chronologically last Assistant message, if any.
    pub fn last_assistant_reply(&self) -> Option<&str> {
        self.messages.iter().rev().find_map(|m| match m {
            Message::Assistant(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

/// Request, raised by the transfer tool, to hand the conversation to another agent.
///
/// Only the three non-classification agents are valid targets; construction enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    target: AgentId,
}

impl TransferRequest {
    pub fn new(target: AgentId) -> Result<Self, AgentIdError> {
        if target.is_transfer_target() {
            Ok(Self { target })
        } else {
            Err(AgentIdError::NotTransferTarget(target))
        }
    }

    /// Parses a tool argument (`"teacher_agent"` etc.) into a request.
    pub fn parse(agent_name: &str) -> Result<Self, AgentIdError> {
        Self::new(agent_name.parse()?)
    }

    pub fn target(&self) -> AgentId {
        self.target
    }

    /// State update carried by the request: `current_agent := target`.
    pub fn apply(&self, state: &mut TutorState) {
        state.current_agent = Some(self.target);
    }
}

/// A single tool invocation produced by the LLM (Think node) and consumed by Act.
///
/// `arguments` is the raw JSON string from the model; Act parses it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name as registered in the agent's ToolSource.
    pub name: String,
    /// Arguments as JSON string.
    pub arguments: String,
    /// Optional id to match with ToolResult.
    pub id: Option<String>,
}

/// Result of executing one tool call (Act node output, Observe node input).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub call_id: Option<String>,
    pub name: Option<String>,
    /// Result text, or the error message when `is_error` is set.
    pub content: String,
    #[serde(default)]
    pub is_error: bool,
}

/// State for one agent's ReAct loop: Think → Act → Observe.
///
/// `messages` starts as the agent's System prompt followed by the shared history; Think
/// appends Assistant messages, Observe appends tool observations. `transfer` is set by Act
/// when the transfer tool succeeds; the loop then ends without another Think.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReActState {
    pub messages: Vec<Message>,
    /// Current round tool calls from the LLM (Think writes, Act reads).
    pub tool_calls: Vec<ToolCall>,
    /// Current round tool execution results (Act writes, Observe reads and merges).
    pub tool_results: Vec<ToolResult>,
    /// Number of observe rounds completed; used to enforce max turns.
    #[serde(default)]
    pub turn_count: u32,
    /// Set when a tool asked to hand the conversation to another agent.
    #[serde(default)]
    pub transfer: Option<TransferRequest>,
}

impl ReActState {
    /// Initial ReAct state for one agent invocation.
    pub fn with_prompt(system_prompt: &str, history: &[Message]) -> Self {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(Message::system(system_prompt));
        messages.extend(history.iter().cloned());
        Self {
            messages,
            ..Self::default()
        }
    }

    /// Returns the content of the chronologically last Assistant message, if any.
    pub fn last_assistant_reply(&self) -> Option<String> {
        self.messages.iter().rev().find_map(|m| match m {
            Message::Assistant(s) => Some(s.clone()),
            _ => None,
        })
    }
}
