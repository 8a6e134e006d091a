//! PlasmoDB tool router - builds the rmcp ToolRouter from the definitions.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::GeneSearchTool;

/// Build the tool router with all plasmodb tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(GeneSearchTool::create_route())
}
