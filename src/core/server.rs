//! Domain server implementation.
//!
//! A `DomainServer` wraps exactly one upstream API domain and implements the
//! MCP protocol for it by delegating tool calls to that domain's router.
//! Construction is pure: it registers the domain's tool table and performs
//! no I/O, so building a server is safe to repeat (the multiplexed transport
//! builds one per route prefix at startup).

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};

use crate::domains::{DomainId, plasmodb, pubmed, quickgo};

/// MCP handler for a single domain.
#[derive(Clone)]
pub struct DomainServer {
    /// The domain this server fronts.
    domain: DomainId,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl DomainServer {
    /// Build the server for one domain.
    pub fn new(domain: DomainId) -> Self {
        let tool_router = match domain {
            DomainId::Pubmed => pubmed::build_tool_router::<Self>(),
            DomainId::Plasmodb => plasmodb::build_tool_router::<Self>(),
            DomainId::Quickgo => quickgo::build_tool_router::<Self>(),
        };

        Self {
            domain,
            tool_router,
        }
    }

    /// The domain this server fronts.
    pub fn domain(&self) -> DomainId {
        self.domain
    }

    /// The identity name reported to clients.
    pub fn name(&self) -> &'static str {
        self.domain.name()
    }

    /// The identity version reported to clients.
    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// The usage note reported to clients.
    pub fn instructions(&self) -> &'static str {
        self.domain.instructions()
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for the HTTP transport).
    #[cfg(feature = "http")]
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for the HTTP transport).
    ///
    /// Dispatches through the domain's registry; each tool's handler lives
    /// in its own file under `domains/<domain>/definitions/`.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match self.domain {
            DomainId::Pubmed => pubmed::ToolRegistry::call_tool(name, arguments).await,
            DomainId::Plasmodb => plasmodb::ToolRegistry::call_tool(name, arguments).await,
            DomainId::Quickgo => quickgo::ToolRegistry::call_tool(name, arguments).await,
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for DomainServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.name().into(),
                version: self.version().into(),
                ..Default::default()
            },
            instructions: Some(self.instructions().to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_domain_builds_its_own_tool_table() {
        let pubmed = DomainServer::new(DomainId::Pubmed);
        let plasmodb = DomainServer::new(DomainId::Plasmodb);
        let quickgo = DomainServer::new(DomainId::Quickgo);

        assert_eq!(pubmed.tool_router.list_all().len(), 2);
        assert_eq!(plasmodb.tool_router.list_all().len(), 1);
        assert_eq!(quickgo.tool_router.list_all().len(), 7);
    }

    #[test]
    fn test_identity_follows_domain() {
        let server = DomainServer::new(DomainId::Quickgo);
        assert_eq!(server.name(), "quickgo");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_construction_is_repeatable() {
        // The multiplexed transport may build servers freely; tool tables
        // must come out identical every time.
        let first = DomainServer::new(DomainId::Quickgo);
        let second = DomainServer::new(DomainId::Quickgo);

        let first_names: Vec<_> = first
            .tool_router
            .list_all()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        let second_names: Vec<_> = second
            .tool_router
            .list_all()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(first_names, second_names);
    }

    #[test]
    fn test_get_info_reports_domain_identity() {
        let server = DomainServer::new(DomainId::Plasmodb);
        let info = server.get_info();
        assert_eq!(info.server_info.name, "plasmodb");
        assert!(info.capabilities.tools.is_some());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_call_tool_routes_to_own_domain_only() {
        let quickgo = DomainServer::new(DomainId::Quickgo);
        // A pubmed tool name must not resolve through the quickgo server.
        let result = quickgo
            .call_tool("getFullText", serde_json::json!({"pmid": "1"}))
            .await;
        assert!(result.unwrap_err().contains("Unknown tool"));
    }
}
