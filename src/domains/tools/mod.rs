//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for the stdio transport
//!
//! Argument validation happens at the route boundary: tool parameters are
//! typed structs, and any payload that does not deserialize into them is
//! rejected with an invalid-params protocol error before any tool logic
//! (or network call) runs. Unknown tool names never reach a route; the
//! router answers with method-not-found semantics.

pub mod definitions;
pub mod router;

pub use definitions::ScrapeTool;
pub use router::build_tool_router;
