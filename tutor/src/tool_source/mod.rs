//! Tool source abstraction: list tools and call a tool.
//!
//! The ReAct nodes depend on `ToolSource` instead of a concrete tool registry;
//! implementations are `AggregateToolSource` (registered [`Tool`](crate::tools::Tool)s,
//! used by every tutor agent) and `MockToolSource` (tests).

mod mock;

pub use mock::MockToolSource;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::state::TransferRequest;

/// Tool specification, aligned with MCP `tools/list` result item.
///
/// **Interaction**: Returned by `ToolSource::list_tools()`; handed to the chat model so
/// it can emit tool calls.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolSpec {
    /// Tool name (e.g. `transfer_to_agent`).
    pub name: String,
    /// Human-readable description for the LLM.
    pub description: Option<String>,
    /// JSON Schema for arguments.
    pub input_schema: Value,
}

/// Result of a single tool call.
///
/// `transfer` is set only by the transfer tool; ActNode copies it into
/// `ReActState::transfer`, which ends the agent's loop and hands control to the parent graph.
///
/// **Interaction**: Returned by `ToolSource::call_tool()`; ActNode maps this to
/// `ToolResult` and writes into `ReActState::tool_results`.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCallContent {
    /// Result text shown to the model as the tool observation.
    pub text: String,
    /// Control-flow request carried alongside the text.
    pub transfer: Option<TransferRequest>,
}

impl ToolCallContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            transfer: None,
        }
    }

    pub fn with_transfer(mut self, transfer: TransferRequest) -> Self {
        self.transfer = Some(transfer);
        self
    }
}

/// Errors from listing or calling tools.
///
/// **Interaction**: Returned by `ToolSource::list_tools()` and `call_tool()`; ActNode
/// turns them into error observations for the model.
#[derive(Debug, Error)]
pub enum ToolSourceError {
    #[error("tool not found: {0}")]
    NotFound(String),
    #[error("invalid arguments: {0}")]
    InvalidInput(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("tool failed: {0}")]
    Failed(String),
}

/// Tool source: list tools and call a tool.
///
/// Think node uses `list_tools()` (through the chat client) and Act node uses
/// `call_tool(name, args)`.
///
/// **Interaction**: Used by `ReactAgent` (list_tools) and ActNode (call_tool).
#[async_trait]
pub trait ToolSource: Send + Sync {
    /// List available tools.
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError>;

    /// Call a tool by name with JSON arguments.
    async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolCallContent, ToolSourceError>;
}
