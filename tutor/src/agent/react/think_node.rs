//! Think node: read messages, call LLM, write assistant message and optional tool_calls.
//!
//! ThinkNode holds an LLM client and implements `Node<ReActState>`; run reads
//! state.messages, calls the LLM, appends the assistant text (when there is any) and
//! sets state.tool_calls from the response (empty when no tools).

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::state::ReActState;

/// Reply used when the model returns neither text nor tool calls.
pub const EMPTY_RESPONSE_FALLBACK: &str =
    "No text response from the model. Please try again or check the API.";

/// Think node: one ReAct step that calls the LLM with current messages.
///
/// Appends one assistant message and sets `tool_calls` from the response. An empty
/// assistant text alongside tool calls is not recorded.
///
/// **Interaction**: Implements `Node<ReActState>`; routed by `tools_condition`.
pub struct ThinkNode {
    llm: Arc<dyn LlmClient>,
}

impl ThinkNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<ReActState> for ThinkNode {
    fn id(&self) -> &str {
        "think"
    }

    async fn run(&self, state: ReActState) -> Result<(ReActState, Next), AgentError> {
        let response = self.llm.invoke(&state.messages).await?;
        let mut messages = state.messages;
        if !response.content.is_empty() {
            messages.push(Message::Assistant(response.content));
        } else if response.tool_calls.is_empty() {
            messages.push(Message::assistant(EMPTY_RESPONSE_FALLBACK));
        }
        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "llm usage"
            );
        }
        let new_state = ReActState {
            messages,
            tool_calls: response.tool_calls,
            tool_results: state.tool_results,
            turn_count: state.turn_count,
            transfer: state.transfer,
        };
        Ok((new_state, Next::Continue))
    }
}
