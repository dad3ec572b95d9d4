//! State graph: nodes + explicit edges (from → to) and optional conditional edges.
//!
//! Add nodes with `add_node`, define the chain with `add_edge(from, to)` using
//! `START` and `END` for graph entry/exit. Use `add_conditional_edges` to route
//! to the next node based on state. Then `compile` to get a `CompiledStateGraph`.
//!
//! # Conditional edges
//!
//! From a source node, a routing function `(state) -> key` is called; the key is
//! used as the next node id, or looked up in an optional path map. A node must have
//! either one outgoing `add_edge` or `add_conditional_edges`, not both.
//!
//! `START` may itself be the source of conditional edges. The router then acts as the
//! graph's entry router: it picks the first node of every run, and is consulted again
//! whenever a node returns `Next::Reroute`.
//!
//! # State Updates
//!
//! Nodes return a new state that completely replaces the previous state.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::{CompiledStateGraph, Entry};
use crate::graph::conditional::{ConditionalRouter, ConditionalRouterFn, NextEntry};
use crate::graph::node::Node;

/// Sentinel for graph entry: use as `from_id` in `add_edge(START, first_node_id)`.
pub const START: &str = "__start__";

/// Sentinel for graph exit: use as `to_id` in `add_edge(last_node_id, END)`.
pub const END: &str = "__end__";

/// Default maximum number of node steps in one `invoke`.
pub const DEFAULT_RECURSION_LIMIT: usize = 25;

/// State graph: nodes plus explicit edges and optional conditional edges.
///
/// Generic over state type `S`. Build with `add_node` / `add_edge(from, to)` (use
/// `START` and `END` for entry/exit), and optionally `add_conditional_edges` for
/// state-based routing. Then `compile()` to obtain an executable graph.
///
/// **Interaction**: Accepts `Arc<dyn Node<S>>`; produces `CompiledStateGraph<S>`.
pub struct StateGraph<S> {
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// Edges (from_id, to_id). A node may have one outgoing edge or conditional_edges, not both.
    edges: Vec<(String, String)>,
    /// Conditional edges: source id (node or START) -> router.
    conditional_edges: HashMap<String, ConditionalRouter<S>>,
    recursion_limit: usize,
}

impl<S> Default for StateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
            conditional_edges: HashMap::new(),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Sets the maximum number of node steps per `invoke`. Exceeding it fails the run with
    /// `AgentError::RecursionLimit`.
    pub fn with_recursion_limit(self, recursion_limit: usize) -> Self {
        Self {
            recursion_limit,
            ..self
        }
    }

    /// Adds a node; id must be unique. Replaces if same id.
    ///
    /// Returns `&mut Self` for method chaining. The node is stored as
    /// `Arc<dyn Node<S>>`; use `add_edge` to include it in the chain.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node<S>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Adds an edge from `from_id` to `to_id`.
    ///
    /// Use `START` for graph entry and `END` for graph exit. Both ids (except
    /// START/END) must be registered via `add_node` before `compile()`.
    /// A node may have either one outgoing edge or `add_conditional_edges`, not both.
    pub fn add_edge(&mut self, from_id: impl Into<String>, to_id: impl Into<String>) -> &mut Self {
        self.edges.push((from_id.into(), to_id.into()));
        self
    }

    /// Adds conditional edges from `source` (a node id or `START`): next node is
    /// determined by `path(state)`.
    ///
    /// - When `path_map` is `None`, the return value of `path` is the next node id (or END).
    /// - When `path_map` is `Some(map)`, the return value is the key; next node is
    ///   `map[key]` if present, otherwise the key itself.
    ///
    /// All path_map values must be valid node ids or `END`. Keys returned without a
    /// map are checked at run time; an unknown id fails the run with
    /// `AgentError::UnknownNode`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// graph.add_conditional_edges(
    ///     START,
    ///     Arc::new(|s: &TutorState| route(s).as_str().to_string()),
    ///     None,
    /// );
    /// ```
    pub fn add_conditional_edges(
        &mut self,
        source: impl Into<String>,
        path: ConditionalRouterFn<S>,
        path_map: Option<HashMap<String, String>>,
    ) -> &mut Self {
        self.conditional_edges
            .insert(source.into(), ConditionalRouter::new(path, path_map));
        self
    }

    /// Builds the executable graph: validates that all edge node ids exist, that there is
    /// exactly one way in from START and at least one way out to END.
    ///
    /// Without conditional edges the plain edges must form a single linear chain.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        for (from, to) in &self.edges {
            if from != START && !self.nodes.contains_key(from) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            if to != END && !self.nodes.contains_key(to) {
                return Err(CompilationError::NodeNotFound(to.clone()));
            }
        }
        for (source, router) in &self.conditional_edges {
            if source != START && !self.nodes.contains_key(source) {
                return Err(CompilationError::NodeNotFound(source.clone()));
            }
            if let Some(ref path_map) = router.path_map {
                for target in path_map.values() {
                    if target != END && !self.nodes.contains_key(target) {
                        return Err(CompilationError::InvalidConditionalPathMap(target.clone()));
                    }
                }
            }
        }

        let start_edges: Vec<String> = self
            .edges
            .iter()
            .filter(|(f, _)| f == START)
            .map(|(_, t)| t.clone())
            .collect();
        let start_router = self.conditional_edges.get(START).cloned();
        let entry = match (start_edges.as_slice(), start_router) {
            ([], None) => return Err(CompilationError::MissingStart),
            ([], Some(router)) => Entry::Router(router),
            ([first], None) => Entry::Node(first.clone()),
            ([_], Some(_)) => {
                return Err(CompilationError::NodeHasBothEdgeAndConditional(
                    START.to_string(),
                ))
            }
            _ => {
                return Err(CompilationError::InvalidChain(
                    "multiple edges from START (branch)".into(),
                ))
            }
        };

        let has_end = self.edges.iter().any(|(_, t)| t == END)
            || self.conditional_edges.values().any(|r| {
                r.path_map
                    .as_ref()
                    .map_or(true, |m| m.values().any(|v| v == END))
            });
        if !has_end {
            return Err(CompilationError::MissingEnd);
        }

        let non_start_edges = || self.edges.iter().filter(|(f, _)| f.as_str() != START);
        let edge_froms: HashSet<&String> = non_start_edges().map(|(f, _)| f).collect();
        if edge_froms.len() != non_start_edges().count() {
            return Err(CompilationError::InvalidChain(
                "duplicate from (branch)".into(),
            ));
        }
        for source in self.conditional_edges.keys() {
            if edge_froms.contains(source) {
                return Err(CompilationError::NodeHasBothEdgeAndConditional(
                    source.clone(),
                ));
            }
        }

        let mut next_map: HashMap<String, NextEntry<S>> = non_start_edges()
            .map(|(f, t)| (f.clone(), NextEntry::Unconditional(t.clone())))
            .collect();
        for (source, router) in &self.conditional_edges {
            if source != START {
                next_map.insert(source.clone(), NextEntry::Conditional(router.clone()));
            }
        }

        let mut edge_order = Vec::new();
        if let Entry::Node(first) = &entry {
            edge_order.push(first.clone());
            if self.conditional_edges.is_empty() {
                let linear_next: HashMap<&String, &String> =
                    non_start_edges().map(|(f, t)| (f, t)).collect();
                let mut current = first;
                let mut visited = HashSet::new();
                visited.insert(current.clone());
                while let Some(&next) = linear_next.get(current) {
                    if next == END {
                        break;
                    }
                    if !visited.insert(next.clone()) {
                        return Err(CompilationError::InvalidChain("cycle detected".into()));
                    }
                    edge_order.push(next.clone());
                    current = next;
                }
            }
        }

        Ok(CompiledStateGraph {
            nodes: self.nodes,
            entry,
            edge_order,
            next_map,
            recursion_limit: self.recursion_limit,
        })
    }
}
