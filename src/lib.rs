#![deny(missing_docs)]

//! Core library for the embedmem MCP server.
//!
//! The crate adapts a remote embedding/vector-search HTTP service into an MCP
//! surface (tools, a templated resource, and prompts) consumable by agent
//! hosts over stdio. It performs no embedding or storage work itself.

/// Environment-driven configuration management.
pub mod config;
/// Structured logging and tracing setup.
pub mod logging;
/// Model Context Protocol server implementation.
pub mod mcp;
/// HTTP client for the remote embedding service.
pub mod remote;
