//! Observe node: read tool_results, merge into messages, clear tool_calls and tool_results.

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::message::Message;
use crate::state::ReActState;

/// Maximum number of ReAct loop rounds (observe passes) before forcing End.
pub const MAX_REACT_TURNS: u32 = 10;

/// Observe node: one ReAct step that merges tool results into state and clears tool_*.
///
/// Appends each result as a User message (`"Tool web_search_tool returned: ..."`) so the
/// next Think round has context, then loops back to think. Ends after
/// [`MAX_REACT_TURNS`] rounds or when the round had no tool calls.
pub struct ObserveNode;

impl ObserveNode {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ObserveNode {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Node<ReActState> for ObserveNode {
    fn id(&self) -> &str {
        "observe"
    }

    async fn run(&self, state: ReActState) -> Result<(ReActState, Next), AgentError> {
        let had_tool_calls = !state.tool_calls.is_empty();
        let mut messages = state.messages;
        for tr in &state.tool_results {
            let name = tr
                .name
                .as_deref()
                .or(tr.call_id.as_deref())
                .unwrap_or("tool");
            let verb = if tr.is_error { "failed" } else { "returned" };
            messages.push(Message::User(format!(
                "Tool {} {}: {}",
                name, verb, tr.content
            )));
        }
        let next_turn = state.turn_count.saturating_add(1);
        let next = if next_turn >= MAX_REACT_TURNS {
            tracing::warn!(turns = next_turn, "ReAct turn limit reached");
            Next::End
        } else if had_tool_calls {
            Next::Node("think".to_string())
        } else {
            Next::End
        };
        let new_state = ReActState {
            messages,
            tool_calls: vec![],
            tool_results: vec![],
            turn_count: next_turn,
            transfer: state.transfer,
        };
        Ok((new_state, next))
    }
}
