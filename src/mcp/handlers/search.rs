//! Handler for the `search-content` tool.

use std::sync::Arc;

use crate::{
    mcp::format::{NO_MATCH_TEXT, search_error_text},
    remote::{EmbeddingApiClient, VectorSearchRequest},
};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::Deserialize;

use super::parse_arguments;

/// Request payload accepted by the `search-content` tool.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchToolRequest {
    /// Natural-language search query, mapped to the service's `prompt` field.
    pub(crate) query: String,
    /// Optional cap on aggregated matches, mapped to `match_count`. The
    /// service applies its own default when unset.
    #[serde(default, rename = "maxMatches")]
    pub(crate) max_matches: Option<u32>,
}

/// Handle `search-content` by running a vector similarity query remotely.
pub(crate) async fn handle_search(
    client: &Arc<EmbeddingApiClient>,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let args: SearchToolRequest = parse_arguments(arguments)?;
    if args.query.trim().is_empty() {
        return Err(McpError::invalid_params("`query` must not be empty", None));
    }
    if args.max_matches == Some(0) {
        return Err(McpError::invalid_params(
            "`maxMatches` must be a positive integer",
            None,
        ));
    }

    let request = VectorSearchRequest {
        prompt: args.query,
        match_count: args.max_matches,
    };
    let response = client.vector_search(&request).await;

    if let Some(error) = response.error.filter(|error| !error.trim().is_empty()) {
        return Ok(CallToolResult::error(vec![Content::text(
            search_error_text(&error),
        )]));
    }

    if response.context_text.trim().is_empty() {
        return Ok(CallToolResult::success(vec![Content::text(NO_MATCH_TEXT)]));
    }

    // Interior whitespace and formatting are the service's; pass through untouched.
    Ok(CallToolResult::success(vec![Content::text(
        response.context_text,
    )]))
}
