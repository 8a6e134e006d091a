//! QuickGO tool registry - registration and HTTP dispatch.

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::{
    AncestorsTool, ChildrenTool, CompleteTool, DetailsTool, GraphTool, SearchTool, SlimTool,
};

/// Tool registry for the quickgo domain.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            SearchTool::NAME,
            SlimTool::NAME,
            GraphTool::NAME,
            DetailsTool::NAME,
            AncestorsTool::NAME,
            ChildrenTool::NAME,
            CompleteTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SearchTool::to_tool(),
            SlimTool::to_tool(),
            GraphTool::to_tool(),
            DetailsTool::to_tool(),
            AncestorsTool::to_tool(),
            ChildrenTool::to_tool(),
            CompleteTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            SearchTool::NAME => SearchTool::http_handler(arguments).await,
            SlimTool::NAME => SlimTool::http_handler(arguments).await,
            GraphTool::NAME => GraphTool::http_handler(arguments).await,
            DetailsTool::NAME => DetailsTool::http_handler(arguments).await,
            AncestorsTool::NAME => AncestorsTool::http_handler(arguments).await,
            ChildrenTool::NAME => ChildrenTool::http_handler(arguments).await,
            CompleteTool::NAME => CompleteTool::http_handler(arguments).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}
