//! Error types and handling for the MCP server.
//!
//! Search failures never show up here: they are turned into error objects
//! inside the tool. This type covers startup and infrastructure failures.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport layer errors.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// HTTP client construction errors.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
