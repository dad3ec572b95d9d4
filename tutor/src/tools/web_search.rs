//! `web_search_tool`: grounding text from the web.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::search::{SearchClient, SEARCH_ERROR_SENTINEL};
use crate::tool_source::{ToolCallContent, ToolSourceError, ToolSpec};
use crate::tools::Tool;

/// Tool name for web search.
pub const TOOL_WEB_SEARCH: &str = "web_search_tool";

/// Runs a query through a [`SearchClient`] and returns the results as a JSON array of
/// `{title, url, cleaned_text}`.
///
/// A failed search is not a tool error: the result text is [`SEARCH_ERROR_SENTINEL`],
/// which agent prompts tell the model to recognize and not use as grounding.
pub struct WebSearchTool {
    client: Arc<dyn SearchClient>,
}

impl WebSearchTool {
    pub fn new(client: Arc<dyn SearchClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    fn name(&self) -> &str {
        TOOL_WEB_SEARCH
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: TOOL_WEB_SEARCH.to_string(),
            description: Some(format!(
                "Search the web for current, accurate information on a topic. Returns up to \
                 five results with title, url and cleaned page text. Returns \"{}\" when the \
                 search fails.",
                SEARCH_ERROR_SENTINEL
            )),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "Search query." }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: serde_json::Value) -> Result<ToolCallContent, ToolSourceError> {
        let query = args
            .get("query")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| ToolSourceError::InvalidInput("missing query".to_string()))?;
        let results = match self.client.search(query).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(error = %e, query = %query, "web search failed");
                return Ok(ToolCallContent::new(SEARCH_ERROR_SENTINEL));
            }
        };
        let text = serde_json::to_string(&results)
            .map_err(|e| ToolSourceError::Failed(e.to_string()))?;
        Ok(ToolCallContent::new(text))
    }
}
