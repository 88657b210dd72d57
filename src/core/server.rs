//! MCP Server implementation.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tools live in `domains/tools/definitions/`; the ToolRouter is
//! built in `domains/tools/router.rs`.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::build_tool_router;
use crate::domains::tools::definitions::encyclopedia::NaverClient;

#[cfg(feature = "http")]
use crate::domains::tools::{ToolError, ToolRegistry};

/// Instructions reported to clients on initialization.
pub const INSTRUCTIONS: &str = "Naver encyclopedia search server. Call `search_encyclopedia` with a keyword (`query`), \
     optionally `display` (results per page, max 100) and `start` (first result position, max 1000).";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Upstream search client shared by all invocations.
    client: Arc<NaverClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let config = Arc::new(config);
        let client = Arc::new(NaverClient::new(config.clone())?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config,
            client,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "title": t.title,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, ToolError> {
        ToolRegistry::new(self.client.clone())
            .call_tool(name, arguments)
            .await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_initialization() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "naver-encyclopedia-mcp");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
        assert!(!server.config().naver.has_credentials());
    }

    #[test]
    fn test_list_tools() {
        let server = McpServer::new(Config::default()).unwrap();
        let tools = server.list_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "search_encyclopedia");
        assert!(tools[0]["inputSchema"]["properties"]["query"].is_object());
    }

    #[test]
    fn test_new_rejects_invalid_api_url() {
        let config = Config::with_naver(Some("id"), Some("secret"), "not a url");
        assert!(matches!(
            McpServer::new(config),
            Err(crate::core::error::Error::Config(_))
        ));
    }

    #[test]
    fn test_get_info_enables_tools_only() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }
}
