//! Tutor agent contract and its adapter into the conversation graph.
//!
//! An [`Agent`] sees the full ordered history and either replies or asks for a transfer.
//! [`AgentNode`] turns that into a graph step over [`TutorState`]: replies are appended
//! and the turn continues along the node's edges; a transfer updates `current_agent` and
//! re-routes from the entry within the same turn.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::message::Message;
use crate::state::{AgentId, TransferRequest, TutorState};

/// Outcome of one agent invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentReply {
    /// Messages produced this turn, oldest first; the last one is the assistant's reply.
    Reply(Vec<Message>),
    /// Hand the conversation to another agent. The agent's own messages are dropped.
    Transfer(TransferRequest),
}

/// A tutor agent: fixed identity, prompt and tools behind one call.
///
/// Implementations must not keep conversational memory of their own; everything they
/// know about the session comes from `history`.
#[async_trait]
pub trait Agent: Send + Sync {
    fn id(&self) -> AgentId;

    /// One agent turn over the full ordered history.
    async fn respond(&self, history: &[Message]) -> Result<AgentReply, AgentError>;
}

/// Graph node that runs an [`Agent`] against the shared [`TutorState`].
///
/// **Interaction**: Registered under the agent's wire name by `build_tutor_graph`; its
/// `Next::Reroute` is resolved by the graph's entry router.
pub struct AgentNode {
    agent: Arc<dyn Agent>,
}

impl AgentNode {
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl Node<TutorState> for AgentNode {
    fn id(&self) -> &str {
        self.agent.id().as_str()
    }

    async fn run(&self, mut state: TutorState) -> Result<(TutorState, Next), AgentError> {
        match self.agent.respond(&state.messages).await? {
            AgentReply::Reply(messages) => {
                state.messages.extend(messages);
                Ok((state, Next::Continue))
            }
            AgentReply::Transfer(request) => {
                request.apply(&mut state);
                Ok((state, Next::Reroute))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(AgentId, AgentReply);

    #[async_trait]
    impl Agent for Fixed {
        fn id(&self) -> AgentId {
            self.0
        }
        async fn respond(&self, _history: &[Message]) -> Result<AgentReply, AgentError> {
            Ok(self.1.clone())
        }
    }

    #[tokio::test]
    async fn reply_appends_and_continues() {
        let node = AgentNode::new(Arc::new(Fixed(
            AgentId::Teacher,
            AgentReply::Reply(vec![Message::assistant("F = ma")]),
        )));
        assert_eq!(node.id(), "teacher_agent");
        let mut state = TutorState::new();
        state.push_user("teach me");
        let (state, next) = node.run(state).await.unwrap();
        assert_eq!(next, Next::Continue);
        assert_eq!(state.last_assistant_reply(), Some("F = ma"));
        assert_eq!(state.current_agent, None);
    }

    #[tokio::test]
    async fn transfer_sets_current_agent_and_reroutes() {
        let request = TransferRequest::new(AgentId::Feynman).unwrap();
        let node = AgentNode::new(Arc::new(Fixed(
            AgentId::Classification,
            AgentReply::Transfer(request),
        )));
        let mut state = TutorState::new();
        state.push_user("hi");
        let (state, next) = node.run(state).await.unwrap();
        assert_eq!(next, Next::Reroute);
        assert_eq!(state.current_agent, Some(AgentId::Feynman));
        assert_eq!(state.messages.len(), 1);
    }
}
