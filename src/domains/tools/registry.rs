//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use super::definitions::SearchEncyclopediaTool;
use super::definitions::encyclopedia::NaverClient;
#[cfg(feature = "http")]
use super::error::ToolError;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    client: Arc<NaverClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<NaverClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![SearchEncyclopediaTool::NAME]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            SearchEncyclopediaTool::NAME => {
                SearchEncyclopediaTool::http_handler(arguments, self.client.clone())
                    .await
                    .map_err(ToolError::invalid_arguments)
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    fn test_client() -> Arc<NaverClient> {
        Arc::new(NaverClient::new(Arc::new(Config::default())).unwrap())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_client());
        assert_eq!(registry.tool_names(), vec!["search_encyclopedia"]);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_without_credentials_returns_error_object() {
        let registry = ToolRegistry::new(test_client());
        let result = registry
            .call_tool("search_encyclopedia", serde_json::json!({ "query": "test" }))
            .await
            .unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(result["structuredContent"]["error_code"], "CONFIG_ERROR");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_invalid_arguments() {
        let registry = ToolRegistry::new(test_client());
        let result = registry
            .call_tool("search_encyclopedia", serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_client());
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
