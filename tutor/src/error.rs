//! Agent execution error types.
//!
//! Used by graph nodes, the tutor agents and the session entry point.

use thiserror::Error;

/// Agent execution error.
///
/// Returned by `Node::run` and `Agent::respond` when a step fails, and by
/// `CompiledStateGraph::invoke` when routing cannot continue.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Execution failed with a message (e.g. LLM call failed, tool error).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// A routing decision named a node that is not registered in the graph.
    ///
    /// Configuration error: raised instead of falling back to a default node.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// The graph ran more node steps than allowed in one invocation.
    #[error("recursion limit of {0} steps reached without ending the run")]
    RecursionLimit(usize),
}

impl AgentError {
    /// True for errors caused by how the graph was wired rather than by a collaborator.
    pub fn is_configuration(&self) -> bool {
        matches!(self, AgentError::UnknownNode(_))
    }
}
