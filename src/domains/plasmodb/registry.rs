//! PlasmoDB tool registry - registration and HTTP dispatch.

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::GeneSearchTool;

/// Tool registry for the plasmodb domain.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![GeneSearchTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![GeneSearchTool::to_tool()]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            GeneSearchTool::NAME => GeneSearchTool::http_handler(arguments).await,
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
        assert_eq!(names, vec!["searchGenesByText"]);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let result = ToolRegistry::call_tool("searchGenesById", serde_json::json!({})).await;
        assert!(result.is_err());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_requires_query() {
        let result = ToolRegistry::call_tool("searchGenesByText", serde_json::json!({})).await;
        assert!(result.unwrap_err().contains("Invalid arguments"));
    }
}
