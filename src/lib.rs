//! Naver encyclopedia search over the Model Context Protocol.
//!
//! The crate exposes a single MCP tool, `search_encyclopedia`, backed by the
//! Naver encyclopedia search API. Every invocation yields either a
//! normalized result page or a structured error object; failures never
//! escape as protocol errors.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and the
//!   STDIO / HTTP transports
//! - **domains**: business logic
//!   - **tools**: the encyclopedia tool, its upstream client and models
//!
//! # Example
//!
//! ```rust,no_run
//! use naver_encyclopedia_mcp::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result, TransportConfig, TransportService};
pub use domains::tools::definitions::encyclopedia::{
    ErrorResponse, NaverClient, SearchOutcome, SearchResponse, search_encyclopedia,
};
