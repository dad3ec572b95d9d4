//! Router: which agent handles the next step.

use crate::state::{AgentId, TutorState};

/// Maps shared state to the agent for the next step: `current_agent`, or classification
/// when none is set. Reads nothing else; called on every entry into the tutor graph.
pub fn route(state: &TutorState) -> AgentId {
    state.current_agent.unwrap_or(AgentId::Classification)
}
