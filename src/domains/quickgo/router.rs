//! QuickGO tool router - builds the rmcp ToolRouter from the definitions.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    AncestorsTool, ChildrenTool, CompleteTool, DetailsTool, GraphTool, SearchTool, SlimTool,
};

/// Build the tool router with all quickgo tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SearchTool::create_route())
        .with_route(SlimTool::create_route())
        .with_route(GraphTool::create_route())
        .with_route(DetailsTool::create_route())
        .with_route(AncestorsTool::create_route())
        .with_route(ChildrenTool::create_route())
        .with_route(CompleteTool::create_route())
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router();
        let tools = router.list_all();
        assert_eq!(tools.len(), 7);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"search"));
        assert!(names.contains(&"getSlim"));
        assert!(names.contains(&"getGraph"));
        assert!(names.contains(&"getDetails"));
        assert!(names.contains(&"getAncestors"));
        assert!(names.contains(&"getChildren"));
        assert!(names.contains(&"getComplete"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router();
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
