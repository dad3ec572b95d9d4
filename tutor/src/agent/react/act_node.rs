//! Act node: read tool_calls, call ToolSource for each, write tool_results.
//!
//! # Tool errors
//!
//! A failed tool call never fails the node. It is recorded as an error result built from
//! [`TOOL_ERROR_TEMPLATE`], so the model sees what went wrong and can retry or answer
//! without the tool.
//!
//! # Transfers
//!
//! When a tool result carries a [`TransferRequest`](crate::state::TransferRequest), the
//! request is stored in `ReActState::transfer`, the remaining tool calls of the round are
//! skipped and the node returns `Next::End`.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace, warn};

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::state::{ReActState, ToolResult};
use crate::tool_source::{ToolSource, ToolSourceError};

fn truncate_for_log(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        format!("{}...", s.chars().take(max_len).collect::<String>())
    }
}

/// Parses tool-call arguments; empty or malformed JSON becomes `{}` so the tool reports
/// the missing fields itself. A JSON string holding JSON is unwrapped once.
fn parse_tool_arguments(arguments: &str) -> Value {
    let raw = if arguments.trim().is_empty() {
        serde_json::json!({})
    } else {
        match serde_json::from_str(arguments) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, arguments = %arguments, "tool arguments JSON parse failed, using empty object");
                serde_json::json!({})
            }
        }
    };
    if let Some(s) = raw.as_str() {
        serde_json::from_str(s).unwrap_or(raw)
    } else {
        raw
    }
}

/// Error result recorded for a failed tool call.
pub const TOOL_ERROR_TEMPLATE: &str =
    "Error executing tool '{tool_name}' with kwargs {tool_kwargs} with error:\n {error}\n Please fix the error and try again.";

fn tool_error_message(error: &ToolSourceError, tool_name: &str, tool_args: &Value) -> String {
    TOOL_ERROR_TEMPLATE
        .replace("{tool_name}", tool_name)
        .replace("{tool_kwargs}", &tool_args.to_string())
        .replace("{error}", &error.to_string())
}

/// Act node: one ReAct step that executes tool_calls and produces tool_results.
///
/// **Interaction**: Implements `Node<ReActState>`; uses the same `ToolSource` whose
/// specs the agent's chat client was given.
pub struct ActNode {
    tools: Arc<dyn ToolSource>,
}

impl ActNode {
    pub fn new(tools: Arc<dyn ToolSource>) -> Self {
        Self { tools }
    }
}

#[async_trait]
impl Node<ReActState> for ActNode {
    fn id(&self) -> &str {
        "act"
    }

    async fn run(&self, state: ReActState) -> Result<(ReActState, Next), AgentError> {
        let mut tool_results = Vec::with_capacity(state.tool_calls.len());
        let mut transfer = state.transfer;

        for tc in &state.tool_calls {
            let args = parse_tool_arguments(&tc.arguments);
            debug!(tool = %tc.name, args = ?args, "Calling tool");

            match self.tools.call_tool(&tc.name, args.clone()).await {
                Ok(content) => {
                    trace!(
                        tool = %tc.name,
                        result_len = content.text.len(),
                        result_preview = %truncate_for_log(&content.text, 200),
                        "Tool returned"
                    );
                    tool_results.push(ToolResult {
                        call_id: tc.id.clone(),
                        name: Some(tc.name.clone()),
                        content: content.text,
                        is_error: false,
                    });
                    if let Some(request) = content.transfer {
                        debug!(tool = %tc.name, target = %request.target(), "Transfer requested; stopping tool round");
                        transfer = Some(request);
                        break;
                    }
                }
                Err(e) => {
                    warn!(tool = %tc.name, error = %e, "Tool call failed");
                    tool_results.push(ToolResult {
                        call_id: tc.id.clone(),
                        name: Some(tc.name.clone()),
                        content: tool_error_message(&e, &tc.name, &args),
                        is_error: true,
                    });
                }
            }
        }

        let next = if transfer.is_some() {
            Next::End
        } else {
            Next::Continue
        };
        let new_state = ReActState {
            messages: state.messages,
            tool_calls: state.tool_calls,
            tool_results,
            turn_count: state.turn_count,
            transfer,
        };
        Ok((new_state, next))
    }
}
