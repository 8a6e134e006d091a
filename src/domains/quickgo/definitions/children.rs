//! Ontology term children tool.

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
use crate::domains::common::{error_result, success_result};
use crate::domains::quickgo::BASE_URL;

use super::common::{require_ids, terms_request};

/// Parameters for the children lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChildrenParams {
    #[schemars(
        description = "A list of term IDs to retrieve children for.",
        length(min = 1)
    )]
    pub ids: Vec<String>,
}

/// Ontology term children tool.
#[derive(Debug, Clone)]
pub struct ChildrenTool;

impl ChildrenTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getChildren";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Get Ontology Children";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Retrieves the children of specified ontology terms.";

    /// Build the upstream request for the given parameters.
    pub fn request(params: &ChildrenParams) -> UpstreamRequest {
        terms_request(&params.ids, "/children")
    }

    /// Run the lookup and return the body verbatim.
    pub async fn execute(gateway: &UpstreamGateway, params: ChildrenParams) -> CallToolResult {
        if let Err(message) = require_ids("ids", &params.ids) {
            return error_result(&message);
        }

        info!("Fetching children for {} term(s)", params.ids.len());

        match gateway.send(&Self::request(&params)).await {
            Ok(body) => success_result(body),
            Err(e) => error_result(&format!("Children lookup failed: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ChildrenParams>(),
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
                let params: ChildrenParams =
                    serde_json::from_value(serde_json::Value::Object(args))
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
        let params: ChildrenParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {}", e))?;

        let gateway = UpstreamGateway::new(BASE_URL);
        let result = Self::execute(&gateway, params).await;

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }
}
