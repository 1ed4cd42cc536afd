//! Model Context Protocol (MCP) integration for embedmem.
//!
//! This module wires the remote embedding client into an MCP server so
//! editors and agent hosts can store and search knowledge over stdio. The
//! surface area consists of:
//!
//! - Tools: `store-content` and `search-content`.
//! - Resource template: `search://{query}`, exposing search results as a
//!   markdown resource.
//! - Prompts: `store-content` and `search-content` templates nudging agents
//!   toward the matching tools.
//!
//! Handlers, schemas, prompts, and formatting helpers are kept in focused
//! submodules to make tests and reviews small and targeted.

mod format;
pub mod handlers;
mod prompts;
mod registry;
mod schemas;
mod server;

pub use server::EmbeddingMcpServer;
