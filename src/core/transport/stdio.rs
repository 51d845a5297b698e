//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP. Registers an interrupt watcher
//! so Ctrl-C cancels the running service and the transport closes before
//! process exit.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport.
    ///
    /// Blocks until the client disconnects or an interrupt is received.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("UseScraper MCP server running on stdio");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        // Orderly shutdown on interrupt: cancel the service so the
        // transport is closed before the process exits.
        let ct = service.cancellation_token();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Interrupt received, closing transport");
                ct.cancel();
            }
        });

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
