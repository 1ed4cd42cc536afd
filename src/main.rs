//! MCP server entrypoint (stdio transport).
//!
//! Launches an MCP server that exposes the remote embedding service's store
//! and search operations over stdio for editor/agent integrations. All
//! diagnostics go to stderr and the log file; stdout carries the protocol.
use anyhow::{Context, Result};
use embedmem::{config, logging, mcp::EmbeddingMcpServer, remote::EmbeddingApiClient};
use rmcp::{service::ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    config::init_config();
    logging::init_tracing();

    let client = Arc::new(
        EmbeddingApiClient::new().context("failed to construct embedding service client")?,
    );
    let server = EmbeddingMcpServer::new(client);

    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server over stdio")?;

    tracing::info!("MCP embedding storage server running");

    service
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;

    Ok(())
}
