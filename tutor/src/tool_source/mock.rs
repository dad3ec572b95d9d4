//! Mock tool source for tests: fixed tool list and one canned result.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{ToolCallContent, ToolSource, ToolSourceError, ToolSpec};

/// Tool source that lists the given specs and answers every known tool with `result`.
///
/// Unknown names fail with `ToolSourceError::NotFound`. Calls are recorded as
/// `(name, arguments)` for assertions.
pub struct MockToolSource {
    specs: Vec<ToolSpec>,
    result: String,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockToolSource {
    pub fn new(specs: Vec<ToolSpec>, result: impl Into<String>) -> Self {
        Self {
            specs,
            result: result.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// One tool named `name` with an empty object schema.
    pub fn single(name: &str, result: impl Into<String>) -> Self {
        Self::new(
            vec![ToolSpec {
                name: name.to_string(),
                description: Some(format!("mock tool {}", name)),
                input_schema: serde_json::json!({"type": "object", "properties": {}}),
            }],
            result,
        )
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ToolSource for MockToolSource {
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError> {
        Ok(self.specs.clone())
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolCallContent, ToolSourceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((name.to_string(), arguments));
        }
        if self.specs.iter().any(|s| s.name == name) {
            Ok(ToolCallContent::new(self.result.clone()))
        } else {
            Err(ToolSourceError::NotFound(name.to_string()))
        }
    }
}
