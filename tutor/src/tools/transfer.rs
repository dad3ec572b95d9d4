//! `transfer_to_agent`: hand the conversation to another tutor agent.

use async_trait::async_trait;
use serde_json::json;

use crate::state::{AgentId, TransferRequest};
use crate::tool_source::{ToolCallContent, ToolSourceError, ToolSpec};
use crate::tools::Tool;

/// Tool name for agent transfer.
pub const TOOL_TRANSFER_TO_AGENT: &str = "transfer_to_agent";

/// Asks the parent graph to switch `current_agent` and re-route.
///
/// The result carries a [`TransferRequest`]; the calling agent's loop stops as soon as
/// ActNode sees it. Targets outside `teacher_agent` / `feynman_agent` / `quiz_agent`
/// fail with `InvalidInput`, which the agent receives as an error observation.
pub struct TransferTool;

impl TransferTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TransferTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for TransferTool {
    fn name(&self) -> &str {
        TOOL_TRANSFER_TO_AGENT
    }

    fn spec(&self) -> ToolSpec {
        let targets: Vec<&str> = AgentId::TRANSFER_TARGETS
            .iter()
            .map(AgentId::as_str)
            .collect();
        ToolSpec {
            name: TOOL_TRANSFER_TO_AGENT.to_string(),
            description: Some(
                "Transfer the conversation to another tutor agent. Use it when the student \
                 should continue with a different learning method."
                    .to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "agent_name": {
                        "type": "string",
                        "enum": targets,
                        "description": "Agent to hand the conversation to."
                    }
                },
                "required": ["agent_name"]
            }),
        }
    }

    async fn call(&self, args: serde_json::Value) -> Result<ToolCallContent, ToolSourceError> {
        let agent_name = args
            .get("agent_name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolSourceError::InvalidInput("missing agent_name".to_string()))?;
        let request = TransferRequest::parse(agent_name)
            .map_err(|e| ToolSourceError::InvalidInput(e.to_string()))?;
        tracing::info!(target_agent = %request.target(), "transfer requested");
        Ok(
            ToolCallContent::new(format!("Transferring to {}.", request.target()))
                .with_transfer(request),
        )
    }
}
