//! Transport layer for the MCP server.
//!
//! The server communicates over standard input/output, the default MCP
//! transport. The transport handles the connection lifecycle, including
//! orderly shutdown on interrupt, and delegates message processing to the
//! server handler.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
