//! Tool Router - builds the rmcp ToolRouter from the catalog.
//!
//! This module builds the ToolRouter for the STDIO transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own
//! route.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    AbsoluteTool, AverageTool, BatchTool, ComplementTool, DivideTool, FactorialTool,
    FloorDivideTool, MaxValueTool, MinValueTool, ModulusTool, MultiplyTool, NegateTool, PowerTool,
    SquareRootTool, SquareTool, SubtractTool, SumTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SumTool::create_route())
        .with_route(SubtractTool::create_route())
        .with_route(MultiplyTool::create_route())
        .with_route(DivideTool::create_route())
        .with_route(PowerTool::create_route())
        .with_route(ModulusTool::create_route())
        .with_route(FloorDivideTool::create_route())
        .with_route(AbsoluteTool::create_route())
        .with_route(NegateTool::create_route())
        .with_route(SquareTool::create_route())
        .with_route(SquareRootTool::create_route())
        .with_route(AverageTool::create_route())
        .with_route(MaxValueTool::create_route())
        .with_route(MinValueTool::create_route())
        .with_route(FactorialTool::create_route())
        .with_route(ComplementTool::create_route())
        .with_route(BatchTool::create_route())
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
        assert_eq!(tools.len(), 17);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"sum"));
        assert!(names.contains(&"floor_divide"));
        assert!(names.contains(&"square_root"));
        assert!(names.contains(&"factorial"));
        assert!(names.contains(&"batch"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let registry = ToolRegistry::new();
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router();
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
