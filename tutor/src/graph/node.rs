//! Graph node trait: one step in a StateGraph.
//!
//! Receives state `S`, returns updated `S` and `Next` (continue, jump, re-route, or end).
//! Tutor agents become nodes through [`AgentNode`](crate::traits::AgentNode); the ReAct
//! loop inside each agent is itself a graph of Think/Act/Observe nodes.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::AgentError;

use super::Next;

/// One step in a graph: state in, (state out, next step).
///
/// Used by `StateGraph` to run a single step. The graph runner uses `Next` to
/// choose the next node.
///
/// **Interaction**: Implemented by ReAct nodes and by `AgentNode`. See
/// `StateGraph::add_node` and `CompiledStateGraph::invoke`.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Node id (e.g. `"think"`, `"teacher_agent"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// One step: state in, (state out, next step).
    async fn run(&self, state: S) -> Result<(S, Next), AgentError>;
}
