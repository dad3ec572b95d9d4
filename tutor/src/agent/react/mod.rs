//! ReAct loop used by every tutor agent: Think, Act, Observe, and routing.
//!
//! # Main types
//!
//! - **[`ThinkNode`]**: Calls the LLM with current messages; may output tool calls.
//! - **[`ActNode`]**: Executes [`state.tool_calls`](crate::state::ReActState::tool_calls) via
//!   [`ToolSource`](crate::tool_source::ToolSource) and fills `tool_results`; stops the loop
//!   when a tool asks for a transfer.
//! - **[`ObserveNode`]**: Merges tool results into messages and loops back to think.
//! - **[`ReactAgent`]**: Compiles think → act → observe into a graph and exposes it as an
//!   [`Agent`](crate::traits::Agent).
//! - **[`tools_condition`]**: Conditional routing: if there are tool calls, go to act; else end.
//!
//! # Routing
//!
//! ```rust,ignore
//! let path_map: HashMap<String, String> = [
//!     ("tools".into(), "act".into()),
//!     (END.into(), END.into()),
//! ].into_iter().collect();
//! graph.add_conditional_edges(
//!     "think",
//!     Arc::new(|state: &ReActState| tools_condition(state).as_str().to_string()),
//!     Some(path_map),
//! );
//! ```

mod act_node;
mod observe_node;
mod runner;
mod think_node;

pub use act_node::{ActNode, TOOL_ERROR_TEMPLATE};
pub use observe_node::{ObserveNode, MAX_REACT_TURNS};
pub use runner::ReactAgent;
pub use think_node::{ThinkNode, EMPTY_RESPONSE_FALLBACK};

use crate::graph::END;
use crate::state::ReActState;

/// Output of the tools_condition function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolsConditionResult {
    /// Route to the tools execution node.
    Tools,
    /// Route to END.
    End,
}

impl ToolsConditionResult {
    /// `Tools` -> `"tools"`, `End` -> `"__end__"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tools => "tools",
            Self::End => END,
        }
    }
}

/// Routes after think: `Tools` when the last LLM turn requested tool calls, else `End`.
pub fn tools_condition(state: &ReActState) -> ToolsConditionResult {
    if state.tool_calls.is_empty() {
        ToolsConditionResult::End
    } else {
        ToolsConditionResult::Tools
    }
}
