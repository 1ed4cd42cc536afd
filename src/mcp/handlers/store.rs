//! Handler for the `store-content` tool.

use std::sync::Arc;

use crate::{
    mcp::format::{store_error_text, store_success_text},
    remote::{EmbeddingApiClient, GenerateEmbeddingsRequest},
};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::parse_arguments;

/// Content type applied when the caller omits `type`.
pub(crate) const DEFAULT_CONTENT_TYPE: &str = "markdown";
/// Source label applied when the caller omits `source`.
pub(crate) const DEFAULT_SOURCE: &str = "api";

/// Request payload accepted by the `store-content` tool.
#[derive(Debug, Deserialize)]
pub(crate) struct StoreToolRequest {
    /// Text to embed and store remotely.
    pub(crate) content: String,
    /// Unique identifier path; the remote service overwrites on reuse.
    pub(crate) path: String,
    /// Optional content type label.
    #[serde(default, rename = "type")]
    pub(crate) content_type: Option<String>,
    /// Optional source label.
    #[serde(default)]
    pub(crate) source: Option<String>,
    /// Optional parent page path, passed through unset when absent.
    #[serde(default, rename = "parentPath")]
    pub(crate) parent_path: Option<String>,
    /// Optional open metadata object.
    #[serde(default)]
    pub(crate) meta: Option<Map<String, Value>>,
}

/// Handle `store-content` by forwarding the content to the embedding service.
pub(crate) async fn handle_store(
    client: &Arc<EmbeddingApiClient>,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let args: StoreToolRequest = parse_arguments(arguments)?;
    if args.content.trim().is_empty() {
        return Err(McpError::invalid_params("`content` must not be empty", None));
    }
    if args.path.trim().is_empty() {
        return Err(McpError::invalid_params("`path` must not be empty", None));
    }

    let request = build_store_request(args);
    let response = client.generate_embeddings(&request).await;

    if !response.success {
        let message = response
            .error
            .filter(|error| !error.trim().is_empty())
            .unwrap_or_else(|| "Unknown error".to_string());
        return Ok(CallToolResult::error(vec![Content::text(
            store_error_text(&message),
        )]));
    }

    let sections = response.sections.unwrap_or(0);
    tracing::debug!(path = %request.path, sections, "Stored content remotely");
    Ok(CallToolResult::success(vec![Content::text(
        store_success_text(&request.path, sections),
    )]))
}

/// Apply defaults and map the tool arguments onto the outbound request body.
pub(crate) fn build_store_request(args: StoreToolRequest) -> GenerateEmbeddingsRequest {
    let StoreToolRequest {
        content,
        path,
        content_type,
        source,
        parent_path,
        meta,
    } = args;

    GenerateEmbeddingsRequest {
        content,
        path,
        content_type: content_type.unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
        source: source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        parent_path,
        meta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_from(value: Value) -> StoreToolRequest {
        serde_json::from_value(value).expect("arguments parse")
    }

    #[test]
    fn build_store_request_applies_defaults() {
        let request = build_store_request(request_from(json!({
            "content": "abc",
            "path": "/p",
        })));
        assert_eq!(request.content_type, "markdown");
        assert_eq!(request.source, "api");
        assert!(request.parent_path.is_none());
        assert!(request.meta.is_none());
    }

    #[test]
    fn default_substitution_is_idempotent() {
        let implicit = build_store_request(request_from(json!({
            "content": "abc",
            "path": "/p",
        })));
        let explicit = build_store_request(request_from(json!({
            "content": "abc",
            "path": "/p",
            "type": "markdown",
            "source": "api",
        })));
        assert_eq!(implicit, explicit);
        assert_eq!(
            serde_json::to_value(&implicit).expect("serializes"),
            serde_json::to_value(&explicit).expect("serializes"),
        );
    }

    #[test]
    fn build_store_request_preserves_explicit_values() {
        let request = build_store_request(request_from(json!({
            "content": "abc",
            "path": "/p/child",
            "type": "html",
            "source": "crawler",
            "parentPath": "/p",
            "meta": { "lang": "en" },
        })));
        assert_eq!(request.content_type, "html");
        assert_eq!(request.source, "crawler");
        assert_eq!(request.parent_path.as_deref(), Some("/p"));
        assert_eq!(
            request.meta.as_ref().and_then(|meta| meta.get("lang")),
            Some(&Value::String("en".into()))
        );
    }
}
