use std::collections::BTreeMap;

use crate::tool_source::{ToolCallContent, ToolSourceError, ToolSpec};
use crate::tools::r#trait::Tool;

/// Central registry for managing a collection of tools.
///
/// Stores tools by name and provides registration, listing and calling. Listing is
/// ordered by name so the tool list sent to the model is stable across runs.
///
/// # Interaction
///
/// - **Tool**: Stores `Box<dyn Tool>` instances
/// - **AggregateToolSource**: Delegates `list_tools()` and `call_tool()` to this registry
pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates a new empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Registers a tool. If a tool with the same name already exists, it is replaced.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Lists all registered tools as ToolSpec objects.
    pub fn list(&self) -> Vec<ToolSpec> {
        self.tools.values().map(|tool| tool.spec()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Calls a tool by name with the given arguments.
    ///
    /// Returns `ToolSourceError::NotFound` when no tool has that name.
    pub async fn call(
        &self,
        name: &str,
        args: serde_json::Value,
    ) -> Result<ToolCallContent, ToolSourceError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolSourceError::NotFound(name.to_string()))?;
        tool.call(args).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
