//! Next-step result from a graph node: continue, jump, re-route from the entry, or end.
//!
//! The graph runner uses this to decide the next node or to stop.

/// Next step after running a node.
///
/// - **Continue**: follow the node's outgoing edge (or linear order); with no edge, end.
/// - **Node(id)**: jump to the given node (e.g. observe → think for the ReAct loop).
/// - **Reroute**: go back to START and let the entry router pick the next node from the
///   updated state. Used for agent transfer: the node has already written the new
///   `current_agent`, the router reads it.
/// - **End**: stop; return current state as final result.
///
/// **Interaction**: Returned by `Node::run`; consumed by `CompiledStateGraph::invoke`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Next {
    /// Follow the outgoing edge; if the node has none, equivalent to End.
    Continue,
    /// Run the node with the given id next.
    Node(String),
    /// Resolve the next node again from START using the current state.
    Reroute,
    /// Stop and return the current state.
    End,
}
