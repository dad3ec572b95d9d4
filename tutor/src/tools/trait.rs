use async_trait::async_trait;

use crate::tool_source::{ToolCallContent, ToolSourceError, ToolSpec};

/// Represents a single tool that can be called by the LLM.
///
/// Each tool has a unique name, a specification (description and JSON schema),
/// and implements the call logic. Tools are registered with ToolRegistry and
/// can be called via AggregateToolSource.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use serde_json::Value;
/// use tutor::tools::Tool;
/// use tutor::tool_source::{ToolCallContent, ToolSourceError, ToolSpec};
///
/// struct EchoTool;
///
/// #[async_trait]
/// impl Tool for EchoTool {
///     fn name(&self) -> &str {
///         "echo"
///     }
///
///     fn spec(&self) -> ToolSpec {
///         ToolSpec {
///             name: "echo".to_string(),
///             description: Some("Echo the input".to_string()),
///             input_schema: serde_json::json!({}),
///         }
///     }
///
///     async fn call(&self, args: Value) -> Result<ToolCallContent, ToolSourceError> {
///         Ok(ToolCallContent::new(args.to_string()))
///     }
/// }
/// ```
///
/// # Interaction
///
/// - **ToolRegistry**: Stores tools by name
/// - **AggregateToolSource**: Implements ToolSource trait by delegating to ToolRegistry
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    ///
    /// Must be unique across all tools registered in a ToolRegistry.
    fn name(&self) -> &str;

    /// Returns the specification for this tool: name, description for the LLM and
    /// JSON schema for arguments.
    fn spec(&self) -> ToolSpec;

    /// Executes the tool with the given arguments.
    ///
    /// Invalid arguments fail with `ToolSourceError::InvalidInput`; the error text is
    /// shown to the model as the tool observation.
    async fn call(&self, args: serde_json::Value) -> Result<ToolCallContent, ToolSourceError>;
}
