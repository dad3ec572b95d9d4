//! Mock LLM for tests.
//!
//! Replays a script of responses in order and records every message list it was called
//! with, so tests can drive an agent through tool calls, transfers and final replies.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse};
use crate::message::Message;

/// Mock LLM: fixed or scripted assistant text and tool_calls.
///
/// - `with_no_tool_calls(text)`: every call returns `text` (think → END).
/// - `scripted(responses)`: each call pops the next response; an exhausted script fails
///   the call, which surfaces in tests as an unexpected extra LLM round.
/// - `failing(msg)`: every call fails with `AgentError::ExecutionFailed`.
///
/// **Interaction**: Implements `LlmClient`; used by ThinkNode and `LlmQuizGenerator`.
pub struct MockLlm {
    script: Mutex<VecDeque<LlmResponse>>,
    /// Returned on every call once the script is empty; `None` fails instead.
    fixed: Option<LlmResponse>,
    failure: Option<String>,
    calls: Mutex<Vec<Vec<Message>>>,
}

impl MockLlm {
    /// Creates a mock that returns assistant text and no tool_calls (END path).
    pub fn with_no_tool_calls(content: impl Into<String>) -> Self {
        Self::fixed(LlmResponse::text(content))
    }

    /// Creates a mock that replays `responses` in order, one per call.
    pub fn scripted(responses: Vec<LlmResponse>) -> Self {
        Self {
            script: Mutex::new(responses.into()),
            fixed: None,
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a mock whose every call fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::scripted(vec![])
        }
    }

    fn fixed(response: LlmResponse) -> Self {
        Self {
            fixed: Some(response),
            ..Self::scripted(vec![])
        }
    }

    /// Number of `invoke` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// Message lists received, one entry per call.
    pub fn recorded_calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(messages.to_vec());
        }
        if let Some(ref msg) = self.failure {
            return Err(AgentError::ExecutionFailed(msg.clone()));
        }
        let next = self
            .script
            .lock()
            .map_err(|_| AgentError::ExecutionFailed("mock llm lock poisoned".into()))?
            .pop_front();
        next.or_else(|| self.fixed.clone())
            .ok_or_else(|| AgentError::ExecutionFailed("mock llm script exhausted".into()))
    }
}
