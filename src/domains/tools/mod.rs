//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call by name.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations
//! - `router.rs` - rmcp ToolRouter builder for STDIO transport
//! - `registry.rs` - Tool listing and HTTP dispatch
//! - `error.rs` - Tool dispatch error types

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
