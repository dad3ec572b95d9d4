//! Logging utilities for graph execution.
//!
//! Structured `tracing` events for graph runs, node execution, state updates and
//! agent re-routing.

use std::fmt::Debug;

/// Log node execution start.
pub fn log_node_start(node_id: &str) {
    tracing::debug!(node_id = node_id, "Starting node execution");
}

/// Log the input state of a node.
pub fn log_node_state<S: Debug>(node_id: &str, state: &S) {
    tracing::trace!(node_id = node_id, state = ?state, "Node execution: state");
}

/// Log node execution completion.
pub fn log_node_complete(node_id: &str, next: &crate::graph::Next) {
    tracing::debug!(node_id = node_id, ?next, "Node execution complete");
}

/// Log state update.
pub fn log_state_update(node_id: &str) {
    tracing::debug!(node_id = node_id, "State updated");
}

/// Log a re-route from START after a node asked for it (agent transfer).
pub fn log_reroute(from: &str, to: &str) {
    tracing::info!(from = from, to = to, "Re-routing from entry");
}

/// Log graph execution start.
pub fn log_graph_start() {
    tracing::debug!("Starting graph execution");
}

/// Log graph execution completion.
pub fn log_graph_complete(steps: usize) {
    tracing::debug!(steps = steps, "Graph execution complete");
}

/// Level a graph error is logged at: `ERROR` for wiring errors, `WARN` for failures the
/// caller is expected to recover from.
fn graph_error_level(error: &crate::error::AgentError) -> tracing::Level {
    if error.is_configuration() {
        tracing::Level::ERROR
    } else {
        tracing::Level::WARN
    }
}

/// Log graph execution error.
pub fn log_graph_error(error: &crate::error::AgentError) {
    if graph_error_level(error) == tracing::Level::ERROR {
        tracing::error!(?error, "Graph execution error");
    } else {
        tracing::warn!(?error, "Graph execution error");
    }
}
