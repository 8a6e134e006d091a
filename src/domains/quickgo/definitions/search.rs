//! Ontology term search tool.

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

use super::common::{default_limit, default_page};

/// Parameters for the ontology search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    #[schemars(description = "Some value to search for in the ontology.")]
    pub query: String,

    #[serde(default = "default_limit")]
    #[schemars(
        description = "The number of results per page [1-600].",
        range(min = 1, max = 600)
    )]
    pub limit: u32,

    #[serde(default = "default_page")]
    #[schemars(description = "The results page to retrieve.", range(min = 1))]
    pub page: u32,
}

/// Ontology term search tool.
#[derive(Debug, Clone)]
pub struct SearchTool;

impl SearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Search Ontology Terms";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Searches a simple user query, e.g., query=apopto. If possible, response fields include: id, name, isObsolete, aspect (for GO).";

    fn validate(params: &SearchParams) -> Result<(), String> {
        if !(1..=600).contains(&params.limit) {
            return Err(format!(
                "Parameter 'limit' must be between 1 and 600, got {}",
                params.limit
            ));
        }
        if params.page < 1 {
            return Err(format!(
                "Parameter 'page' must be at least 1, got {}",
                params.page
            ));
        }
        Ok(())
    }

    /// Build the upstream request for the given parameters.
    pub fn request(params: &SearchParams) -> UpstreamRequest {
        UpstreamRequest::get("/ontology/go/search")
            .param("query", params.query.clone())
            .param("limit", params.limit)
            .param("page", params.page)
    }

    /// Run the search and return the body verbatim.
    pub async fn execute(gateway: &UpstreamGateway, params: SearchParams) -> CallToolResult {
        if let Err(message) = Self::validate(&params) {
            return error_result(&message);
        }

        info!("Searching ontology terms matching: {}", params.query);

        match gateway.send(&Self::request(&params)).await {
            Ok(body) => success_result(body),
            Err(e) => error_result(&format!("Ontology search failed: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchParams>(),
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
                let params: SearchParams = serde_json::from_value(serde_json::Value::Object(args))
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
        let params: SearchParams =
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

    fn params(json: &str) -> SearchParams {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_defaults_apply_when_omitted() {
        let p = params(r#"{"query": "apopto"}"#);
        assert_eq!(p.limit, 25);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn test_omitted_defaults_match_explicit_defaults() {
        let omitted = SearchTool::request(&params(r#"{"query": "apopto"}"#));
        let explicit =
            SearchTool::request(&params(r#"{"query": "apopto", "limit": 25, "page": 1}"#));
        assert_eq!(
            omitted.query_string().unwrap(),
            explicit.query_string().unwrap()
        );
    }

    #[test]
    fn test_request_query_string() {
        let request = SearchTool::request(&params(r#"{"query": "apopto"}"#));
        assert_eq!(request.path, "/ontology/go/search");
        assert_eq!(
            request.query_string().unwrap(),
            "query=apopto&limit=25&page=1"
        );
    }

    #[test]
    fn test_limit_bounds_are_exact() {
        assert!(SearchTool::validate(&params(r#"{"query": "q", "limit": 600}"#)).is_ok());
        assert!(SearchTool::validate(&params(r#"{"query": "q", "limit": 601}"#)).is_err());
        assert!(SearchTool::validate(&params(r#"{"query": "q", "limit": 1}"#)).is_ok());
        assert!(SearchTool::validate(&params(r#"{"query": "q", "limit": 0}"#)).is_err());
    }

    #[test]
    fn test_page_bounds_are_exact() {
        assert!(SearchTool::validate(&params(r#"{"query": "q", "page": 1}"#)).is_ok());
        assert!(SearchTool::validate(&params(r#"{"query": "q", "page": 0}"#)).is_err());
    }

    #[test]
    fn test_non_integer_limit_is_rejected_by_the_schema() {
        let result: Result<SearchParams, _> =
            serde_json::from_str(r#"{"query": "q", "limit": 25.5}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_out_of_range_limit_is_rejected_before_any_call() {
        let gateway = UpstreamGateway::new("http://127.0.0.1:1");
        let result = SearchTool::execute(&gateway, params(r#"{"query": "q", "limit": 601}"#)).await;
        assert!(result.is_error.unwrap_or(false));
        if let rmcp::model::RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("between 1 and 600"));
        }
    }
}
