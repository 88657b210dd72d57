//! Tool Router - builds the rmcp ToolRouter for STDIO transport.
//!
//! Each tool definition knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::SearchEncyclopediaTool;
use super::definitions::encyclopedia::NaverClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<NaverClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(SearchEncyclopediaTool::create_route(client))
}
