//! ReAct agent: one compiled think → act → observe graph behind the [`Agent`] trait.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{CompilationError, CompiledStateGraph, StateGraph, END, START};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::state::{AgentId, ReActState};
use crate::tool_source::ToolSource;
use crate::traits::{Agent, AgentReply};

use super::{tools_condition, ActNode, ObserveNode, ThinkNode, MAX_REACT_TURNS};

/// A tutor agent built from a system prompt, a chat model and a tool set.
///
/// Each `respond` starts a fresh ReAct run over `[System(prompt), ..history]`. The run
/// ends with a reply (every message produced after the history, last one from the
/// assistant) or, as soon as the transfer tool succeeds, with a transfer. Tool failures
/// are shown to the model as error observations rather than failing the run.
pub struct ReactAgent {
    id: AgentId,
    system_prompt: String,
    graph: CompiledStateGraph<ReActState>,
}

impl ReactAgent {
    pub fn new(
        id: AgentId,
        system_prompt: impl Into<String>,
        llm: Arc<dyn LlmClient>,
        tools: Arc<dyn ToolSource>,
    ) -> Result<Self, CompilationError> {
        let mut graph = StateGraph::<ReActState>::new()
            .with_recursion_limit(MAX_REACT_TURNS as usize * 3 + 1);
        graph
            .add_node("think", Arc::new(ThinkNode::new(llm)))
            .add_node("act", Arc::new(ActNode::new(tools)))
            .add_node("observe", Arc::new(ObserveNode::new()))
            .add_edge(START, "think")
            .add_edge("act", "observe");
        let path_map: HashMap<String, String> = [
            ("tools".to_string(), "act".to_string()),
            (END.to_string(), END.to_string()),
        ]
        .into_iter()
        .collect();
        graph.add_conditional_edges(
            "think",
            Arc::new(|state: &ReActState| tools_condition(state).as_str().to_string()),
            Some(path_map),
        );
        Ok(Self {
            id,
            system_prompt: system_prompt.into(),
            graph: graph.compile()?,
        })
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}

#[async_trait]
impl Agent for ReactAgent {
    fn id(&self) -> AgentId {
        self.id
    }

    async fn respond(&self, history: &[Message]) -> Result<AgentReply, AgentError> {
        let initial = ReActState::with_prompt(&self.system_prompt, history);
        let prefix_len = initial.messages.len();
        let final_state = self.graph.invoke(initial).await?;

        if let Some(transfer) = final_state.transfer {
            tracing::info!(agent = %self.id, target = %transfer.target(), "agent transferred");
            return Ok(AgentReply::Transfer(transfer));
        }

        let produced: Vec<Message> = final_state
            .messages
            .into_iter()
            .skip(prefix_len)
            .collect();
        match produced.last() {
            Some(Message::Assistant(_)) => {}
            _ => {
                return Err(AgentError::ExecutionFailed(format!(
                    "{} ended its turn without a reply",
                    self.id
                )))
            }
        }
        tracing::debug!(agent = %self.id, messages = produced.len(), "agent replied");
        Ok(AgentReply::Reply(produced))
    }
}
