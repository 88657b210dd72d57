//! HTTP client for the Naver encyclopedia search API.
//!
//! One request per call, no retries. The client is shared across concurrent
//! invocations; it holds only the immutable configuration and the reqwest
//! connection pool.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::error::ApiError;
use crate::core::config::Config;
use crate::core::error::Error;

const CLIENT_ID_HEADER: &str = "X-Naver-Client-Id";
const CLIENT_SECRET_HEADER: &str = "X-Naver-Client-Secret";

/// Error body returned by the upstream on non-200 responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpstreamErrorBody {
    error_code: Option<String>,
    error_message: Option<String>,
}

/// Client for the encyclopedia search endpoint.
#[derive(Debug, Clone)]
pub struct NaverClient {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl NaverClient {
    /// Create a client.
    ///
    /// Fails if the configured endpoint is not an absolute http(s) URL or the
    /// HTTP client cannot be constructed. Missing credentials are not checked here.
    pub fn new(config: Arc<Config>) -> crate::Result<Self> {
        let url = reqwest::Url::parse(&config.naver.api_url).map_err(|e| {
            Error::config(format!("invalid API URL '{}': {}", config.naver.api_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "API URL must use http or https: {}",
                config.naver.api_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.naver.timeout_secs))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { http, config })
    }

    /// Clamp `display` and `start` to the configured maxima.
    ///
    /// Only the upper bound is applied; zero or negative values are passed
    /// through to the upstream unchanged.
    pub fn effective_params(&self, display: i64, start: i64) -> (i64, i64) {
        (
            display.min(self.config.naver.max_display),
            start.min(self.config.naver.max_start),
        )
    }

    /// Search the encyclopedia.
    ///
    /// Returns the parsed upstream body on HTTP 200. Every other outcome is
    /// an [`ApiError`].
    #[instrument(
        skip(self, display, start),
        fields(
            effective_display = tracing::field::Empty,
            effective_start = tracing::field::Empty
        )
    )]
    pub async fn search(
        &self,
        query: &str,
        display: i64,
        start: i64,
    ) -> Result<serde_json::Value, ApiError> {
        let Some((client_id, client_secret)) = self.config.naver.credentials() else {
            warn!("Search rejected: Naver API credentials are not configured");
            return Err(ApiError::missing_credentials());
        };

        let (display, start) = self.effective_params(display, start);
        let span = tracing::Span::current();
        span.record("effective_display", display);
        span.record("effective_start", start);

        let display = display.to_string();
        let start = start.to_string();

        let response = self
            .http
            .get(&self.config.naver.api_url)
            .header(CLIENT_ID_HEADER, client_id)
            .header(CLIENT_SECRET_HEADER, client_secret)
            .query(&[
                ("query", query),
                ("display", display.as_str()),
                ("start", start.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!("Upstream request failed: {}", e);
                ApiError::network(e)
            })?;

        let status = response.status();
        debug!("Upstream responded with {}", status);

        if status == StatusCode::OK {
            return response.json().await.map_err(|e| {
                warn!("Failed to read upstream body: {}", e);
                ApiError::network(e)
            });
        }

        Err(Self::error_from_body(status, response.bytes().await.ok()))
    }

    /// Build the error for a non-200 response from its (possibly unreadable) body.
    fn error_from_body(status: StatusCode, body: Option<impl AsRef<[u8]>>) -> ApiError {
        let status_code = status.as_u16();

        let parsed = body
            .and_then(|bytes| serde_json::from_slice::<UpstreamErrorBody>(bytes.as_ref()).ok());

        let error = match parsed {
            Some(body) => ApiError::upstream(
                body.error_code.unwrap_or_else(|| "UNKNOWN".to_string()),
                body.error_message
                    .unwrap_or_else(|| "unknown error".to_string()),
                status_code,
            ),
            None => ApiError::parse(status_code),
        };

        warn!("Upstream error ({}): {}", status_code, error);
        error
    }
}
