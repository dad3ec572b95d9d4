//! Tools callable by the tutor agents, plus the registry that exposes them as a
//! [`ToolSource`](crate::tool_source::ToolSource).

mod aggregate_source;
mod generate_quiz;
mod registry;
mod r#trait;
mod transfer;
mod web_search;

pub use aggregate_source::AggregateToolSource;
pub use generate_quiz::{GenerateQuizTool, TOOL_GENERATE_QUIZ};
pub use r#trait::Tool;
pub use registry::ToolRegistry;
pub use transfer::{TransferTool, TOOL_TRANSFER_TO_AGENT};
pub use web_search::{WebSearchTool, TOOL_WEB_SEARCH};
