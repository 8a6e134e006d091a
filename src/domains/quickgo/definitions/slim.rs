//! Ontology slimming tool.

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

/// Parameters for the slimming lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlimParams {
    #[schemars(
        description = "A list of term IDs forming the 'slim-set'.",
        length(min = 1)
    )]
    pub slims_to_ids: Vec<String>,

    #[serde(default)]
    #[schemars(description = "A list of term IDs from which slimming information is applied.")]
    pub slims_from_ids: Vec<String>,

    #[serde(default)]
    #[schemars(
        description = "The relationships over which the slimming information is computed."
    )]
    pub relations: Vec<String>,
}

/// Ontology slimming tool.
#[derive(Debug, Clone)]
pub struct SlimTool;

impl SlimTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getSlim";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Get Ontology Slim";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Gets slimming information for the provided slim-set, where the slims can be reached only via the provided relationships.";

    /// Build the upstream request for the given parameters.
    ///
    /// Optional lists join to the empty string and are still sent, matching
    /// the service's tolerant handling of blank filters.
    pub fn request(params: &SlimParams) -> UpstreamRequest {
        UpstreamRequest::get("/ontology/go/slim")
            .param("slimsToIds", join_ids(&params.slims_to_ids))
            .param("slimsFromIds", join_ids(&params.slims_from_ids))
            .param("relations", join_ids(&params.relations))
    }

    /// Run the lookup and return the body verbatim.
    pub async fn execute(gateway: &UpstreamGateway, params: SlimParams) -> CallToolResult {
        if let Err(message) = require_ids("slimsToIds", &params.slims_to_ids) {
            return error_result(&message);
        }

        info!("Fetching slim for {} term(s)", params.slims_to_ids.len());

        match gateway.send(&Self::request(&params)).await {
            Ok(body) => success_result(body),
            Err(e) => error_result(&format!("Slim lookup failed: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SlimParams>(),
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
                let params: SlimParams = serde_json::from_value(serde_json::Value::Object(args))
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
        let params: SlimParams =
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
    fn test_wire_names_are_camel_case() {
        let params: SlimParams = serde_json::from_str(
            r#"{"slimsToIds": ["GO:1", "GO:2"], "slimsFromIds": ["GO:3"], "relations": ["is_a"]}"#,
        )
        .unwrap();
        assert_eq!(params.slims_to_ids.len(), 2);
        assert_eq!(params.slims_from_ids, vec!["GO:3"]);
        assert_eq!(params.relations, vec!["is_a"]);
    }

    #[test]
    fn test_optional_lists_default_to_empty_and_are_still_sent() {
        let params: SlimParams =
            serde_json::from_str(r#"{"slimsToIds": ["GO:0006915"]}"#).unwrap();
        let request = SlimTool::request(&params);
        assert_eq!(
            request.query_string().unwrap(),
            "slimsToIds=GO%3A0006915&slimsFromIds=&relations="
        );
    }

    #[test]
    fn test_lists_are_comma_joined() {
        let params: SlimParams = serde_json::from_str(
            r#"{"slimsToIds": ["GO:1", "GO:2", "GO:3"]}"#,
        )
        .unwrap();
        let request = SlimTool::request(&params);
        let (_, value) = &request.params[0];
        assert_eq!(value, "GO:1,GO:2,GO:3");
    }

    #[tokio::test]
    async fn test_empty_slim_set_is_rejected_before_any_call() {
        let gateway = UpstreamGateway::new("http://127.0.0.1:1");
        let params = SlimParams {
            slims_to_ids: vec![],
            slims_from_ids: vec![],
            relations: vec![],
        };
        let result = SlimTool::execute(&gateway, params).await;
        assert!(result.is_error.unwrap_or(false));
        if let rmcp::model::RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("at least one term ID"));
        }
    }
}
