//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and a `.env` file, if present) on top of defaults.
//! The configuration is built once at startup and shared read-only afterwards.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Naver encyclopedia search endpoint.
pub const NAVER_ENCYCLOPEDIA_API_URL: &str = "https://openapi.naver.com/v1/search/encyc.json";

/// Largest `display` value the upstream accepts.
pub const MAX_DISPLAY: i64 = 100;

/// Largest `start` value the upstream accepts.
pub const MAX_START: i64 = 1000;

/// Daily call quota of the upstream API. Informational only, never enforced here.
pub const DAILY_LIMIT: u32 = 25_000;

/// Timeout for a single upstream request.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream Naver API configuration.
    pub naver: NaverConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the upstream Naver search API.
#[derive(Clone, Serialize, Deserialize)]
pub struct NaverConfig {
    /// Value of the `X-Naver-Client-Id` header.
    pub client_id: Option<String>,

    /// Value of the `X-Naver-Client-Secret` header.
    pub client_secret: Option<String>,

    /// Encyclopedia search endpoint.
    pub api_url: String,

    /// Upper bound applied to `display` before calling upstream.
    pub max_display: i64,

    /// Upper bound applied to `start` before calling upstream.
    pub max_start: i64,

    /// Advisory daily quota (documentary).
    pub daily_limit: u32,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for NaverConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaverConfig")
            .field("client_id", &self.client_id.as_ref().map(|_| "[REDACTED]"))
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("api_url", &self.api_url)
            .field("max_display", &self.max_display)
            .field("max_start", &self.max_start)
            .field("daily_limit", &self.daily_limit)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl NaverConfig {
    /// Both credentials, if both are present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let id = self.client_id.as_deref().filter(|s| !s.is_empty())?;
        let secret = self.client_secret.as_deref().filter(|s| !s.is_empty())?;
        Some((id, secret))
    }

    /// Whether both credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials().is_some()
    }
}

impl Default for NaverConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            api_url: NAVER_ENCYCLOPEDIA_API_URL.to_string(),
            max_display: MAX_DISPLAY,
            max_start: MAX_START,
            daily_limit: DAILY_LIMIT,
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "naver-encyclopedia-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            naver: NaverConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads `.env` first when one exists. Credentials come from
    /// `NAVER_CLIENT_ID` and `NAVER_CLIENT_SECRET`; missing credentials are
    /// not an error here and only surface when a search is attempted.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        config.transport = TransportConfig::from_env();

        config.naver.client_id = non_empty_var("NAVER_CLIENT_ID");
        config.naver.client_secret = non_empty_var("NAVER_CLIENT_SECRET");

        if let Some(url) = non_empty_var("NAVER_ENCYCLOPEDIA_API_URL") {
            config.naver.api_url = url;
        }

        if let Some(timeout) = non_empty_var("NAVER_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            config.naver.timeout_secs = timeout;
        }

        config
    }

    /// Configuration with the given credentials and upstream URL, defaults elsewhere.
    pub fn with_naver(
        client_id: Option<&str>,
        client_secret: Option<&str>,
        api_url: impl Into<String>,
    ) -> Self {
        let mut config = Self::default();
        config.naver.client_id = client_id.map(str::to_string);
        config.naver.client_secret = client_secret.map(str::to_string);
        config.naver.api_url = api_url.into();
        config
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("NAVER_CLIENT_ID", "test_client_id");
            std::env::set_var("NAVER_CLIENT_SECRET", "test_client_secret");
        }
        let config = Config::from_env();
        assert_eq!(
            config.naver.credentials(),
            Some(("test_client_id", "test_client_secret"))
        );
        unsafe {
            std::env::remove_var("NAVER_CLIENT_ID");
            std::env::remove_var("NAVER_CLIENT_SECRET");
        }
    }

    #[test]
    fn test_empty_credentials_count_as_missing() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("NAVER_CLIENT_ID", "");
            std::env::set_var("NAVER_CLIENT_SECRET", "secret");
        }
        let config = Config::from_env();
        assert!(!config.naver.has_credentials());
        unsafe {
            std::env::remove_var("NAVER_CLIENT_ID");
            std::env::remove_var("NAVER_CLIENT_SECRET");
        }
    }

    #[test]
    fn test_api_url_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("NAVER_ENCYCLOPEDIA_API_URL", "http://127.0.0.1:9999/encyc.json");
        }
        let config = Config::from_env();
        assert_eq!(config.naver.api_url, "http://127.0.0.1:9999/encyc.json");
        unsafe {
            std::env::remove_var("NAVER_ENCYCLOPEDIA_API_URL");
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.naver.api_url, NAVER_ENCYCLOPEDIA_API_URL);
        assert_eq!(config.naver.max_display, 100);
        assert_eq!(config.naver.max_start, 1000);
        assert_eq!(config.naver.daily_limit, 25_000);
        assert_eq!(config.naver.timeout_secs, 10);
        assert!(!config.naver.has_credentials());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let config = Config::with_naver(Some("my_id"), Some("super_secret"), "http://x");
        let debug_str = format!("{:?}", config.naver);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret"));
        assert!(!debug_str.contains("my_id"));
    }
}
