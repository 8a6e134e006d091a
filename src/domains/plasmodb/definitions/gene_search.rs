//! Free-text gene search against the PlasmoDB WDK service.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::core::upstream::{UpstreamGateway, UpstreamRequest};
use crate::domains::common::{error_result, success_result};
use crate::domains::plasmodb::BASE_URL;

/// Search endpoint, relative to the service base URL.
pub const SEARCH_PATH: &str =
    "/record-types/transcript/searches/GenesByText/reports/standard";

/// Organisms searched when the caller does not narrow the filter.
pub const DEFAULT_ORGANISMS: &[&str] = &[
    "Plasmodium falciparum 3D7",
    "Plasmodium vivax P01",
    "Plasmodium berghei ANKA",
    "Plasmodium knowlesi strain H",
    "Plasmodium yoelii yoelii 17X",
];

/// Text fields the search expression is matched against.
const TEXT_FIELDS: &[&str] = &["primary_key", "gene_product", "gene_name", "alias"];

/// Attributes requested in the standard report.
const REPORT_ATTRIBUTES: &[&str] = &["primary_key", "organism", "gene_product"];

/// Parameters for the gene text search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GeneSearchParams {
    #[schemars(description = "Free-text search expression, e.g. 'kinase' or 'PF3D7_0731500'.")]
    pub query: String,

    /// Defaults to the common Plasmodium reference genomes.
    #[serde(default = "default_organisms")]
    #[schemars(
        description = "Organism names to restrict the search to. At least one is required; defaults to the common Plasmodium reference genomes."
    )]
    pub organisms: Vec<String>,
}

fn default_organisms() -> Vec<String> {
    DEFAULT_ORGANISMS.iter().map(|s| s.to_string()).collect()
}

/// PlasmoDB gene text search tool.
#[derive(Debug, Clone)]
pub struct GeneSearchTool;

impl GeneSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "searchGenesByText";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Search Genes By Text";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Searches PlasmoDB gene records by free text across gene IDs, names, aliases and product descriptions. Returns the standard report for every matching gene.";

    fn validate(params: &GeneSearchParams) -> Result<(), String> {
        if params.organisms.is_empty() {
            return Err("Parameter 'organisms' requires at least one organism".to_string());
        }
        Ok(())
    }

    /// Build the upstream request for the given parameters.
    ///
    /// The WDK service expects the organism and field lists as JSON-encoded
    /// array strings inside single string-valued parameters, not as
    /// comma-joined values or JSON arrays.
    pub fn request(params: &GeneSearchParams) -> UpstreamRequest {
        let organisms = Value::from(params.organisms.as_slice()).to_string();
        let fields = Value::from(TEXT_FIELDS).to_string();

        let search_config = json!({
            "parameters": {
                "text_expression": params.query,
                "text_fields": fields,
                "text_search_organism": organisms,
                "document_type": "gene"
            }
        });
        let report_config = json!({
            "attributes": REPORT_ATTRIBUTES,
            "tables": [],
            "attributeFormat": "text"
        });

        UpstreamRequest::post(SEARCH_PATH)
            .param("searchConfig", search_config)
            .param("reportConfig", report_config)
    }

    /// Run the search and return the report body verbatim.
    pub async fn execute(gateway: &UpstreamGateway, params: GeneSearchParams) -> CallToolResult {
        if let Err(message) = Self::validate(&params) {
            return error_result(&message);
        }

        info!("Searching PlasmoDB genes matching: {}", params.query);

        match gateway.send(&Self::request(&params)).await {
            Ok(body) => success_result(body),
            Err(e) => error_result(&format!("Gene search failed: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GeneSearchParams>(),
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
                let params: GeneSearchParams =
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
        let params: GeneSearchParams =
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
    fn test_params_default_organisms() {
        let params: GeneSearchParams =
            serde_json::from_str(r#"{"query": "kinase"}"#).unwrap();
        assert_eq!(params.organisms, default_organisms());
    }

    #[test]
    fn test_organisms_are_json_stringified_not_comma_joined() {
        let params: GeneSearchParams =
            serde_json::from_str(r#"{"query": "kinase"}"#).unwrap();
        let body = GeneSearchTool::request(&params).body();

        let organisms = body
            .pointer("/searchConfig/parameters/text_search_organism")
            .and_then(Value::as_str)
            .unwrap();

        // A JSON-encoded array string, not "a,b,c".
        assert!(organisms.starts_with('['));
        let decoded: Vec<String> = serde_json::from_str(organisms).unwrap();
        assert_eq!(decoded, params.organisms);
    }

    #[test]
    fn test_request_body_shape() {
        let params = GeneSearchParams {
            query: "heat shock".to_string(),
            organisms: vec!["Plasmodium falciparum 3D7".to_string()],
        };
        let request = GeneSearchTool::request(&params);
        assert_eq!(request.path, SEARCH_PATH);

        let body = request.body();
        assert_eq!(
            body.pointer("/searchConfig/parameters/text_expression").unwrap(),
            "heat shock"
        );
        assert_eq!(
            body.pointer("/searchConfig/parameters/document_type").unwrap(),
            "gene"
        );
        assert_eq!(
            body.pointer("/reportConfig/attributeFormat").unwrap(),
            "text"
        );
        assert_eq!(
            body.pointer("/reportConfig/tables").unwrap(),
            &serde_json::json!([])
        );
    }

    #[tokio::test]
    async fn test_empty_organism_list_is_rejected_before_any_call() {
        // The gateway points nowhere; validation must fail first.
        let gateway = UpstreamGateway::new("http://127.0.0.1:1");
        let params = GeneSearchParams {
            query: "kinase".to_string(),
            organisms: vec![],
        };
        let result = GeneSearchTool::execute(&gateway, params).await;
        assert!(result.is_error.unwrap_or(false));
        if let rmcp::model::RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("at least one organism"));
        }
    }
}
