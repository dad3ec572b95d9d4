use async_trait::async_trait;

use crate::tool_source::{ToolCallContent, ToolSource, ToolSourceError, ToolSpec};
use crate::tools::{Tool, ToolRegistry};

/// Aggregates multiple tools and implements the ToolSource trait via ToolRegistry.
///
/// Each tutor agent owns one of these holding exactly the tools it may call.
///
/// # Examples
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() {
/// use tutor::tools::{AggregateToolSource, TransferTool};
/// use tutor::tool_source::ToolSource;
///
/// let source = AggregateToolSource::from_tools(vec![Box::new(TransferTool::new())]);
/// let tools = source.list_tools().await.unwrap();
/// assert_eq!(tools.len(), 1);
/// # }
/// ```
///
/// # Interaction
///
/// - **ToolRegistry**: Internal storage for tools; fixed once the agent is built
/// - **ToolSource**: Implements this trait for use with ActNode and `ReactAgent`
pub struct AggregateToolSource {
    registry: ToolRegistry,
}

impl AggregateToolSource {
    /// Creates a source holding the given tools.
    pub fn from_tools(tools: Vec<Box<dyn Tool>>) -> Self {
        let mut registry = ToolRegistry::new();
        for tool in tools {
            registry.register(tool);
        }
        Self { registry }
    }
}

#[async_trait]
impl ToolSource for AggregateToolSource {
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError> {
        Ok(self.registry.list())
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<ToolCallContent, ToolSourceError> {
        self.registry.call(name, arguments).await
    }
}
