//! Full-text retrieval tool with Markdown output.

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
use crate::domains::pubmed::{BASE_URL, bioc};

/// Parameters for full-text retrieval.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FullTextParams {
    #[schemars(description = "The PubMed ID of the article to retrieve.")]
    pub pmid: String,
}

/// Full-text retrieval tool, rendered as Markdown.
#[derive(Debug, Clone)]
pub struct FullTextTool;

impl FullTextTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getFullText";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Get Full Text";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Retrieves the full text of a PubMed article in Markdown format. Recommended over BioC JSON format unless you need comprehensive metadata.";

    /// Build the upstream request for the given parameters.
    pub fn request(params: &FullTextParams) -> UpstreamRequest {
        UpstreamRequest::get(format!("/BioC_json/{}/unicode", params.pmid))
    }

    /// Fetch the BioC document and render it as Markdown.
    pub async fn execute(gateway: &UpstreamGateway, params: FullTextParams) -> CallToolResult {
        info!("Fetching full text for PMID {}", params.pmid);

        match gateway.send(&Self::request(&params)).await {
            Ok(body) => match bioc::first_document_markdown(&body) {
                Ok(markdown) => success_result(markdown),
                Err(message) => error_result(&message),
            },
            Err(e) => error_result(&format!("Full text retrieval failed: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<FullTextParams>(),
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
                let params: FullTextParams =
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
        let params: FullTextParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {}", e))?;

        let gateway = UpstreamGateway::new(BASE_URL);
        let result = Self::execute(&gateway, params).await;

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }
}
