//! Ontology sub-graph tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::core::upstream::{UpstreamGateway, UpstreamRequest};
use crate::domains::common::{error_result, join_ids, success_result};
use crate::domains::quickgo::BASE_URL;

use super::common::require_ids;

/// Parameters for the sub-graph fetch.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GraphParams {
    #[schemars(
        description = "A list of term IDs specifying the beginning of the sub-graph.",
        length(min = 1)
    )]
    pub start_ids: Vec<String>,

    #[serde(default)]
    #[schemars(description = "A list of term IDs specifying the end of the sub-graph.")]
    pub stop_ids: Vec<String>,

    #[serde(default)]
    #[schemars(description = "A list of relationships over which the graph will navigate.")]
    pub relations: Vec<String>,
}

/// Ontology sub-graph tool.
#[derive(Debug, Clone)]
pub struct GraphTool;

impl GraphTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getGraph";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Get Ontology Term Graph";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetches a sub-graph of the ontology. It contains a set of vertices and edges.";

    /// Build the upstream request for the given parameters.
    pub fn request(params: &GraphParams) -> UpstreamRequest {
        UpstreamRequest::get("/ontology/go/terms/graph")
            .param("startIds", join_ids(&params.start_ids))
            .param("stopIds", join_ids(&params.stop_ids))
            .param("relations", join_ids(&params.relations))
    }

    /// Run the fetch and return the body verbatim.
    pub async fn execute(gateway: &UpstreamGateway, params: GraphParams) -> CallToolResult {
        if let Err(message) = require_ids("startIds", &params.start_ids) {
            return error_result(&message);
        }

        info!("Fetching sub-graph from {} term(s)", params.start_ids.len());

        match gateway.send(&Self::request(&params)).await {
            Ok(body) => success_result(body),
            Err(e) => error_result(&format!("Graph fetch failed: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GraphParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some(Self::TITLE.into()),
        }
    }

    /// Create a ToolRoute for the STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: GraphParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                let gateway = UpstreamGateway::new(BASE_URL);
                Ok(Self::execute(&gateway, params).await)
            }
            .boxed()
        })
    }

    /// HTTP handler for this tool (for the multiplexed transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let params: GraphParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {}", e))?;

        let gateway = UpstreamGateway::new(BASE_URL);
        let result = Self::execute(&gateway, params).await;

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_path_is_fixed() {
        let params: GraphParams =
            serde_json::from_str(r#"{"startIds": ["GO:0008150"]}"#).unwrap();
        let request = GraphTool::request(&params);
        assert_eq!(request.path, "/ontology/go/terms/graph");
        assert_eq!(
            request.query_string().unwrap(),
            "startIds=GO%3A0008150&stopIds=&relations="
        );
    }

    #[tokio::test]
    async fn test_empty_start_ids_is_rejected_before_any_call() {
        let gateway = UpstreamGateway::new("http://127.0.0.1:1");
        let params = GraphParams {
            start_ids: vec![],
            stop_ids: vec![],
            relations: vec![],
        };
        let result = GraphTool::execute(&gateway, params).await;
        assert!(result.is_error.unwrap_or(false));
    }
}
