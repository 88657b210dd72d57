//! Encyclopedia search tool.
//!
//! Dispatches `search_encyclopedia` calls to the [`NaverClient`] and turns
//! every outcome into a [`SearchOutcome`]. A call never fails at the tool
//! level: upstream errors, network failures and unexpected bodies all come
//! back as an [`ErrorResponse`].

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use tracing::{error, info, instrument, warn};

use super::client::NaverClient;
use super::models::{ErrorResponse, SearchEncyclopediaParams, SearchOutcome, SearchResponse};

/// Encyclopedia search tool implementation.
#[derive(Debug, Clone)]
pub struct SearchEncyclopediaTool;

impl SearchEncyclopediaTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_encyclopedia";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search the Naver encyclopedia by keyword. Returns the total match count, the page position (start/display) and the matching entries with title, link, description and thumbnail. On failure returns an error object with error_code, message and status_code instead.";

    /// Run a search and reshape the result.
    #[instrument(skip_all, fields(query = %params.query, display = params.display, start = params.start))]
    pub async fn execute(client: &NaverClient, params: &SearchEncyclopediaParams) -> SearchOutcome {
        info!("Searching encyclopedia");

        match client
            .search(&params.query, params.display, params.start)
            .await
        {
            Ok(raw) => match SearchResponse::from_upstream(raw, params.display) {
                Ok(response) => {
                    info!(
                        "Found {} item(s) of {} total",
                        response.items.len(),
                        response.total
                    );
                    SearchOutcome::Success(response)
                }
                Err(e) => {
                    error!("Unexpected upstream body: {}", e);
                    SearchOutcome::Error(ErrorResponse::unknown(e))
                }
            },
            Err(e) => {
                warn!("Search failed: {}", e);
                SearchOutcome::Error(e.into())
            }
        }
    }

    /// Convert an outcome into an MCP tool result.
    ///
    /// The outcome is carried both as structured content and as JSON text.
    /// Error outcomes set `isError`.
    pub fn to_call_result(outcome: &SearchOutcome) -> CallToolResult {
        let is_error = outcome.is_error();

        match serde_json::to_value(outcome) {
            Ok(structured) => CallToolResult {
                content: vec![Content::text(structured.to_string())],
                structured_content: Some(structured),
                is_error: Some(is_error),
                meta: None,
            },
            Err(e) => {
                error!("Failed to serialize search outcome: {}", e);
                CallToolResult::error(vec![Content::text(format!(
                    "failed to serialize search result: {e}"
                ))])
            }
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: Arc<NaverClient>,
    ) -> Result<serde_json::Value, String> {
        let params: SearchEncyclopediaParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid parameters: {}", e))?;

        let outcome = Self::execute(&client, &params).await;
        let result = Self::to_call_result(&outcome);

        let mut response = serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        });

        if let (Some(structured), Some(obj)) = (result.structured_content, response.as_object_mut())
        {
            obj.insert("structuredContent".to_string(), structured);
        }

        Ok(response)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchEncyclopediaParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Encyclopedia Search".into()),
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(client: Arc<NaverClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: SearchEncyclopediaParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                let outcome = Self::execute(&client, &params).await;
                Ok(Self::to_call_result(&outcome))
            }
            .boxed()
        })
    }
}

/// Search with plain arguments; the signature exposed to transports.
pub async fn search_encyclopedia(
    client: &NaverClient,
    query: &str,
    display: i64,
    start: i64,
) -> SearchOutcome {
    let params = SearchEncyclopediaParams::new(query, display, start);
    SearchEncyclopediaTool::execute(client, &params).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::domains::tools::definitions::encyclopedia::models::EncyclopediaItem;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_returning(template: ResponseTemplate) -> (MockServer, NaverClient) {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(template)
            .mount(&mock_server)
            .await;

        let config = Config::with_naver(Some("id"), Some("secret"), mock_server.uri());
        let client = NaverClient::new(Arc::new(config)).unwrap();
        (mock_server, client)
    }

    fn sample_body() -> serde_json::Value {
        json!({
            "total": 100,
            "start": 1,
            "display": 10,
            "lastBuildDate": "Mon, 26 Sep 2016 10:50:00 +0900",
            "items": [{
                "title": "테스트 제목",
                "link": "http://test.com",
                "description": "테스트 설명",
                "thumbnail": ""
            }]
        })
    }

    #[tokio::test]
    async fn test_end_to_end_success() {
        let (_server, client) =
            client_returning(ResponseTemplate::new(200).set_body_json(sample_body())).await;

        let outcome = search_encyclopedia(&client, "테스트", 10, 1).await;

        assert_eq!(
            outcome,
            SearchOutcome::Success(SearchResponse {
                total: 100,
                start: 1,
                display: 10,
                items: vec![EncyclopediaItem {
                    title: "테스트 제목".into(),
                    link: "http://test.com".into(),
                    description: "테스트 설명".into(),
                    thumbnail: String::new(),
                }],
                last_build_date: Some("Mon, 26 Sep 2016 10:50:00 +0900".into()),
            })
        );

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "total": 100,
                "start": 1,
                "display": 10,
                "items": [{
                    "title": "테스트 제목",
                    "link": "http://test.com",
                    "description": "테스트 설명",
                    "thumbnail": ""
                }],
                "last_build_date": "Mon, 26 Sep 2016 10:50:00 +0900"
            })
        );
    }

    #[tokio::test]
    async fn test_falls_back_to_requested_display() {
        let (_server, client) =
            client_returning(ResponseTemplate::new(200).set_body_json(json!({ "items": [] }))).await;

        let outcome = search_encyclopedia(&client, "x", 37, 5).await;
        match outcome {
            SearchOutcome::Success(response) => {
                assert_eq!(response.total, 0);
                assert_eq!(response.start, 1);
                assert_eq!(response.display, 37);
                assert!(response.items.is_empty());
            }
            SearchOutcome::Error(e) => panic!("unexpected error: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_upstream_error_forwarded() {
        let (_server, client) = client_returning(ResponseTemplate::new(400).set_body_json(json!({
            "errorCode": "SE01",
            "errorMessage": "bad query"
        })))
        .await;

        let outcome = search_encyclopedia(&client, "", 10, 1).await;
        assert_eq!(
            outcome,
            SearchOutcome::Error(ErrorResponse::new("SE01", "bad query", 400))
        );
    }

    #[tokio::test]
    async fn test_unexpected_body_is_unknown_error() {
        let (_server, client) =
            client_returning(ResponseTemplate::new(200).set_body_json(json!({ "items": 7 }))).await;

        match search_encyclopedia(&client, "x", 10, 1).await {
            SearchOutcome::Error(e) => {
                assert_eq!(e.error_code, "UNKNOWN_ERROR");
                assert_eq!(e.status_code, 500);
                assert!(e.message.starts_with("unexpected error:"));
            }
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_network_error() {
        let (_server, client) =
            client_returning(ResponseTemplate::new(200).set_body_string("not json")).await;

        match search_encyclopedia(&client, "x", 10, 1).await {
            SearchOutcome::Error(e) => assert_eq!(e.error_code, "NETWORK_ERROR"),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_failure() {
        let config = Config::with_naver(Some("id"), Some("secret"), "http://127.0.0.1:1/");
        let client = NaverClient::new(Arc::new(config)).unwrap();

        match search_encyclopedia(&client, "테스트", 10, 1).await {
            SearchOutcome::Error(e) => {
                assert_eq!(e.error_code, "NETWORK_ERROR");
                assert_eq!(e.status_code, 500);
            }
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let client = NaverClient::new(Arc::new(Config::default())).unwrap();

        let outcome = search_encyclopedia(&client, "테스트", 10, 1).await;
        match outcome {
            SearchOutcome::Error(e) => {
                assert_eq!(e.error_code, "CONFIG_ERROR");
                assert_eq!(e.status_code, 500);
                assert!(e.error);
            }
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_every_input_yields_one_shape() {
        let (_server, client) =
            client_returning(ResponseTemplate::new(200).set_body_json(sample_body())).await;

        for (query, display, start) in [("", 10, 1), ("x", 0, 0), ("x", -1, -1), ("x", 500, 5000)] {
            let value = serde_json::to_value(search_encyclopedia(&client, query, display, start).await)
                .unwrap();
            let obj = value.as_object().unwrap();
            let is_success = obj.contains_key("total") && obj.contains_key("items");
            let is_error = obj.get("error") == Some(&json!(true));
            assert!(is_success ^ is_error, "mixed or empty shape: {}", value);
        }
    }

    #[tokio::test]
    async fn test_call_result_flags_errors() {
        let client = NaverClient::new(Arc::new(Config::default())).unwrap();
        let outcome = search_encyclopedia(&client, "x", 10, 1).await;

        let result = SearchEncyclopediaTool::to_call_result(&outcome);
        assert_eq!(result.is_error, Some(true));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["error_code"], "CONFIG_ERROR");
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = SearchEncyclopediaTool::to_tool();
        assert_eq!(tool.name, "search_encyclopedia");
        let props = tool.input_schema.get("properties").unwrap();
        assert!(props.get("query").is_some());
        assert!(props.get("display").is_some());
        assert!(props.get("start").is_some());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_http_handler_invalid_params() {
        let client = Arc::new(NaverClient::new(Arc::new(Config::default())).unwrap());
        let result = SearchEncyclopediaTool::http_handler(json!({ "display": 3 }), client).await;
        assert!(result.is_err());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_http_handler_success() {
        let (_server, client) =
            client_returning(ResponseTemplate::new(200).set_body_json(sample_body())).await;

        let result = SearchEncyclopediaTool::http_handler(json!({ "query": "테스트" }), Arc::new(client))
            .await
            .unwrap();

        assert_eq!(result["isError"], false);
        assert_eq!(result["structuredContent"]["total"], 100);
        assert_eq!(result["structuredContent"]["items"][0]["link"], "http://test.com");
    }
}
