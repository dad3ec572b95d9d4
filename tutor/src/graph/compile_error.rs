//! Graph compilation error.
//!
//! Returned by `StateGraph::compile` when edges reference unknown nodes or the graph has
//! no usable entry or exit.

use thiserror::Error;

/// Error when compiling a state graph (e.g. edge references unknown node, invalid chain).
#[derive(Debug, Error)]
pub enum CompilationError {
    /// A node id in an edge was not registered via `add_node` (and is not START/END).
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// No edge and no conditional edges leave START.
    #[error("graph must have exactly one entry from START")]
    MissingStart,

    /// Nothing leads to END.
    #[error("graph must have at least one path to END")]
    MissingEnd,

    /// Edges do not form a valid chain (e.g. branch, cycle).
    #[error("edges must form a single linear chain from START to END: {0}")]
    InvalidChain(String),

    /// A node (or START) has both an outgoing edge and conditional edges.
    #[error("node has both edge and conditional edges: {0}")]
    NodeHasBothEdgeAndConditional(String),

    /// A value in a conditional path_map is not a valid node id or END.
    #[error("conditional path_map invalid target: {0}")]
    InvalidConditionalPathMap(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Display of NodeNotFound contains "node not found" and the node id.
    #[test]
    fn compilation_error_display_node_not_found() {
        let s = CompilationError::NodeNotFound("x".to_string()).to_string();
        assert!(s.contains("node not found"), "{}", s);
        assert!(s.contains("x"), "{}", s);
    }

    #[test]
    fn compilation_error_display_start_and_end() {
        assert!(CompilationError::MissingStart
            .to_string()
            .to_lowercase()
            .contains("start"));
        assert!(CompilationError::MissingEnd
            .to_string()
            .to_lowercase()
            .contains("end"));
    }
}
