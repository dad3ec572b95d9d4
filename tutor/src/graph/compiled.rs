//! Compiled state graph: immutable, supports invoke only.
//!
//! Built by `StateGraph::compile`. Holds nodes, the entry (a fixed first node or an
//! entry router), edge order derived from explicit edges, and the recursion limit.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::error::AgentError;

use super::conditional::ConditionalRouter;
use super::logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    log_node_state, log_reroute, log_state_update,
};
use super::state_graph::{END, START};
use super::{Next, NextEntry, Node};

/// Where a run starts, and where `Next::Reroute` goes back to.
#[derive(Clone)]
pub(crate) enum Entry<S> {
    /// `add_edge(START, id)`.
    Node(String),
    /// `add_conditional_edges(START, ..)`.
    Router(ConditionalRouter<S>),
}

/// Compiled graph: immutable structure, supports invoke only.
///
/// Created by `StateGraph::compile()`. Runs from the entry; uses each node's returned
/// `Next` or conditional router (when present) to choose the next node.
#[derive(Clone)]
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    pub(super) entry: Entry<S>,
    /// Linear order of nodes (used for Next::Continue when no conditional). Only the first
    /// node when the graph has conditional edges; empty with an entry router.
    pub(super) edge_order: Vec<String>,
    /// Map from node id to how to get next: Unconditional(to_id) or Conditional(router).
    pub(super) next_map: HashMap<String, NextEntry<S>>,
    pub(super) recursion_limit: usize,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Maximum number of node steps per `invoke`.
    pub fn recursion_limit(&self) -> usize {
        self.recursion_limit
    }

    fn resolve_entry(&self, state: &S) -> String {
        match &self.entry {
            Entry::Node(id) => id.clone(),
            Entry::Router(router) => router.resolve_next(state),
        }
    }

    fn resolve_next(&self, current_id: &str, state: &S, next: Next) -> Option<String> {
        if next == Next::Reroute {
            let target = self.resolve_entry(state);
            log_reroute(current_id, &target);
            return Some(target);
        }
        if let Some(NextEntry::Conditional(router)) = self.next_map.get(current_id) {
            let target = router.resolve_next(state);
            tracing::debug!(from = %current_id, to = %target, "conditional routing");
            return Some(target);
        }
        match next {
            Next::End => None,
            Next::Node(id) => Some(id),
            Next::Reroute => None,
            Next::Continue => match self.next_map.get(current_id) {
                Some(NextEntry::Unconditional(id)) => Some(id.clone()),
                _ => {
                    let pos = self.edge_order.iter().position(|x| x == current_id)?;
                    self.edge_order.get(pos + 1).cloned()
                }
            },
        }
    }

    async fn run_loop(&self, state: &mut S) -> Result<usize, AgentError> {
        let mut steps = 0usize;
        let mut current_id = self.resolve_entry(state);
        tracing::debug!(from = START, to = %current_id, "entry routing");
        loop {
            if current_id == END {
                return Ok(steps);
            }
            let node = self
                .nodes
                .get(&current_id)
                .cloned()
                .ok_or_else(|| AgentError::UnknownNode(current_id.clone()))?;
            if steps >= self.recursion_limit {
                return Err(AgentError::RecursionLimit(self.recursion_limit));
            }
            steps += 1;

            log_node_start(&current_id);
            log_node_state(&current_id, state);
            let (new_state, next) = node.run(state.clone()).await?;
            log_node_complete(&current_id, &next);
            *state = new_state;
            log_state_update(&current_id);

            match self.resolve_next(&current_id, state, next) {
                Some(id) => current_id = id,
                None => return Ok(steps),
            }
        }
    }

    /// Runs the graph with the given state and returns the final state.
    ///
    /// - `Next::Continue`: follow the node's edge (or linear order); end if there is none.
    /// - `Next::Node(id)`: run the node with that id next.
    /// - `Next::Reroute`: ask the entry router again with the updated state.
    /// - `Next::End`: stop and return current state.
    ///
    /// Fails with `AgentError::UnknownNode` when routing names an unregistered node and
    /// with `AgentError::RecursionLimit` after `recursion_limit` node steps.
    pub async fn invoke(&self, state: S) -> Result<S, AgentError> {
        log_graph_start();
        let mut state = state;
        match self.run_loop(&mut state).await {
            Ok(steps) => {
                log_graph_complete(steps);
                Ok(state)
            }
            Err(e) => {
                log_graph_error(&e);
                Err(e)
            }
        }
    }
}
