//! Minimal state graph: nodes, edges, conditional routing and an entry router.
//!
//! Build a [`StateGraph`] with `add_node` / `add_edge` / `add_conditional_edges`, then
//! `compile()` it into a [`CompiledStateGraph`] and `invoke` it with a state value.
//! The tutor graph routes from `START` by `current_agent`; each agent's ReAct loop is a
//! second, smaller graph of Think/Act/Observe nodes.

mod compile_error;
mod compiled;
mod conditional;
mod logging;
mod next;
mod node;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use conditional::{ConditionalRouter, ConditionalRouterFn, NextEntry};
pub use logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    log_reroute, log_state_update,
};
pub use next::Next;
pub use node::Node;
pub use state_graph::{StateGraph, DEFAULT_RECURSION_LIMIT, END, START};
