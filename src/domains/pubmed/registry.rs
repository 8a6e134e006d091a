//! PubMed tool registry - registration and HTTP dispatch.

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::{FullTextJsonTool, FullTextTool};

/// Tool registry for the pubmed domain.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![FullTextTool::NAME, FullTextJsonTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![FullTextTool::to_tool(), FullTextJsonTool::to_tool()]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            FullTextTool::NAME => FullTextTool::http_handler(arguments).await,
            FullTextJsonTool::NAME => FullTextJsonTool::http_handler(arguments).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"getFullText"));
        assert!(names.contains(&"getFullTextJson"));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let result = ToolRegistry::call_tool("getCitations", serde_json::json!({})).await;
        assert!(result.is_err());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_rejects_bad_arguments() {
        let result =
            ToolRegistry::call_tool("getFullText", serde_json::json!({"pmid": 42})).await;
        assert!(result.unwrap_err().contains("Invalid arguments"));
    }
}
