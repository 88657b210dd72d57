//! Transport configuration types.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{TransportError, TransportResult};

/// Default bind host for the HTTP listener.
pub const DEFAULT_HOST: &str = "localhost";

/// Default bind port for the HTTP listener.
pub const DEFAULT_PORT: u16 = 8000;

/// Serving mode selected on the command line or via `MCP_TRANSPORT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TransportMode {
    /// Line-oriented MCP over stdin/stdout.
    #[value(alias = "stdio")]
    Stdin,

    /// JSON-RPC over HTTP.
    Http,
}

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// HTTP transport with JSON-RPC over POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or http");
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Load HTTP settings from environment variables.
    pub fn from_env() -> Self {
        let port = std::env::var("MCP_SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let host = std::env::var("MCP_SERVER_HOST").unwrap_or_else(|_| default_host());
        let rpc_path = std::env::var("MCP_HTTP_PATH").unwrap_or_else(|_| default_rpc_path());
        let enable_cors = std::env::var("MCP_HTTP_CORS")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);
        Self {
            port,
            host,
            rpc_path,
            enable_cors,
        }
    }
}

impl TransportConfig {
    /// Build the config for an explicitly selected mode.
    ///
    /// `host` and `port` only apply to HTTP; the remaining HTTP settings come
    /// from the environment. Fails if the mode was compiled out.
    #[allow(unused_variables)]
    pub fn for_mode(mode: TransportMode, host: String, port: u16) -> TransportResult<Self> {
        match mode {
            #[cfg(feature = "stdio")]
            TransportMode::Stdin => Ok(Self::Stdio),
            #[cfg(feature = "http")]
            TransportMode::Http => Ok(Self::Http(HttpConfig {
                host,
                port,
                ..HttpConfig::from_env()
            })),
            #[allow(unreachable_patterns)]
            other => Err(TransportError::unsupported(format!("{:?}", other))),
        }
    }

    /// Load transport config from environment variables.
    ///
    /// `MCP_TRANSPORT` selects the mode; unknown or missing values fall back
    /// to the default transport.
    pub fn from_env() -> Self {
        let mode = std::env::var("MCP_TRANSPORT")
            .ok()
            .and_then(|v| TransportMode::from_str(v.trim(), true).ok());

        match mode {
            #[cfg(feature = "http")]
            Some(TransportMode::Http) => Self::Http(HttpConfig::from_env()),
            _ => Self::default(),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on http://{}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }

    /// Check if this transport is the standard STDIO mode.
    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names_accept_stdio_alias() {
        assert_eq!(TransportMode::from_str("stdin", true), Ok(TransportMode::Stdin));
        assert_eq!(TransportMode::from_str("STDIO", true), Ok(TransportMode::Stdin));
        assert_eq!(TransportMode::from_str("Http", true), Ok(TransportMode::Http));
        assert!(TransportMode::from_str("tcp", true).is_err());
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_default_is_stdio() {
        assert!(TransportConfig::default().is_stdio());
        assert!(TransportConfig::for_mode(TransportMode::Stdin, "x".into(), 1)
            .unwrap()
            .is_stdio());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_for_mode_http_overrides_host_and_port() {
        let config = TransportConfig::for_mode(TransportMode::Http, "0.0.0.0".into(), 9001).unwrap();
        match config {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.host, "0.0.0.0");
                assert_eq!(cfg.port, 9001);
            }
            #[allow(unreachable_patterns)]
            _ => panic!("expected HTTP transport"),
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_defaults() {
        let cfg = HttpConfig::default();
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 8000);
        assert_eq!(cfg.rpc_path, "/mcp");
        assert!(cfg.enable_cors);
    }
}
