//! Wire types shared with the remote embedding service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Fixed message reported when the service is unreachable or replies with
/// something unparseable. Callers branch on reply fields, never on transport
/// internals.
pub const CONNECT_FAILURE_MESSAGE: &str = "Failed to connect to embedding service";

/// Errors returned while constructing the embedding service client.
#[derive(Debug, Error)]
pub enum RemoteClientError {
    /// Base URL failed to parse or normalize.
    #[error("Invalid embedding service URL: {0}")]
    InvalidUrl(String),
    /// Underlying HTTP client could not be built.
    #[error("HTTP client construction failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Body of `POST /api/generate-embeddings`.
///
/// `type` and `source` are always sent; the adapter applies the `"markdown"`
/// and `"api"` defaults before the request is built. Unset optional fields are
/// omitted from the serialized body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateEmbeddingsRequest {
    /// Text to embed and store.
    pub content: String,
    /// Unique identifier path; reused paths overwrite per the service's semantics.
    pub path: String,
    /// Content type label.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Origin label for the stored page.
    pub source: String,
    /// Optional path of the parent page.
    #[serde(rename = "parentPath", skip_serializing_if = "Option::is_none")]
    pub parent_path: Option<String>,
    /// Optional open key/value metadata stored alongside the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

/// Identity echo of a stored page.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PageRecord {
    /// Numeric identifier assigned by the service.
    pub id: i64,
    /// Path the page was stored under.
    pub path: String,
    /// Content type label echoed back.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Origin label echoed back.
    pub source: String,
}

/// Outcome of a store call. Never constructed partially: a `success: false`
/// value carries a non-empty error message.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateEmbeddingsResponse {
    /// Whether the service accepted and stored the content.
    pub success: bool,
    /// Stored page identity, present on success.
    #[serde(default)]
    pub page: Option<PageRecord>,
    /// Number of sections derived from the content, present on success.
    #[serde(default)]
    pub sections: Option<u64>,
    /// Failure message, present when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerateEmbeddingsResponse {
    /// Build a failure outcome carrying the given message.
    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            page: None,
            sections: None,
            error: Some(message.into()),
        }
    }

    /// Build the fixed connectivity-failure outcome.
    pub(crate) fn connect_failure() -> Self {
        Self::failure(CONNECT_FAILURE_MESSAGE)
    }
}

/// Body of `POST /api/vector-search`. The service applies its own default
/// when `match_count` is unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorSearchRequest {
    /// Natural-language query to embed and match against stored pages.
    pub prompt: String,
    /// Optional positive cap on the number of matches aggregated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_count: Option<u32>,
}

/// Outcome of a search call. An empty `context_text` with no error is the
/// explicit "no matches" signal, distinct from a failure.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorSearchResponse {
    /// Aggregated passage text answering the query; may be empty.
    #[serde(rename = "contextText", default)]
    pub context_text: String,
    /// Failure message; when present, `context_text` is ignored.
    #[serde(default)]
    pub error: Option<String>,
}

impl VectorSearchResponse {
    /// Build a failure outcome carrying the given message.
    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Self {
            context_text: String::new(),
            error: Some(message.into()),
        }
    }

    /// Build the fixed connectivity-failure outcome.
    pub(crate) fn connect_failure() -> Self {
        Self::failure(CONNECT_FAILURE_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn store_request_omits_unset_optionals() {
        let request = GenerateEmbeddingsRequest {
            content: "abc".into(),
            path: "/p".into(),
            content_type: "markdown".into(),
            source: "api".into(),
            parent_path: None,
            meta: None,
        };
        let body = serde_json::to_value(&request).expect("serializes");
        assert_eq!(
            body,
            json!({
                "content": "abc",
                "path": "/p",
                "type": "markdown",
                "source": "api",
            })
        );
    }

    #[test]
    fn store_request_serializes_parent_path_and_meta() {
        let mut meta = Map::new();
        meta.insert("topic".into(), Value::String("rust".into()));
        let request = GenerateEmbeddingsRequest {
            content: "abc".into(),
            path: "/p/child".into(),
            content_type: "markdown".into(),
            source: "api".into(),
            parent_path: Some("/p".into()),
            meta: Some(meta),
        };
        let body = serde_json::to_value(&request).expect("serializes");
        assert_eq!(body["parentPath"], "/p");
        assert_eq!(body["meta"]["topic"], "rust");
    }

    #[test]
    fn search_request_uses_snake_case_match_count() {
        let request = VectorSearchRequest {
            prompt: "ml".into(),
            match_count: Some(3),
        };
        let body = serde_json::to_value(&request).expect("serializes");
        assert_eq!(body, json!({ "prompt": "ml", "match_count": 3 }));

        let bare = VectorSearchRequest {
            prompt: "ml".into(),
            match_count: None,
        };
        let body = serde_json::to_value(&bare).expect("serializes");
        assert_eq!(body, json!({ "prompt": "ml" }));
    }

    #[test]
    fn search_response_tolerates_missing_fields() {
        let response: VectorSearchResponse = serde_json::from_value(json!({})).expect("parses");
        assert_eq!(response.context_text, "");
        assert!(response.error.is_none());
    }

    #[test]
    fn store_response_parses_success_shape() {
        let response: GenerateEmbeddingsResponse = serde_json::from_value(json!({
            "success": true,
            "page": { "id": 7, "path": "/p", "type": "markdown", "source": "api" },
            "sections": 4,
        }))
        .expect("parses");
        assert!(response.success);
        assert_eq!(response.sections, Some(4));
        assert_eq!(response.page.as_ref().map(|page| page.id), Some(7));
    }

    #[test]
    fn failure_constructors_carry_non_empty_errors() {
        let store = GenerateEmbeddingsResponse::connect_failure();
        assert!(!store.success);
        assert_eq!(store.error.as_deref(), Some(CONNECT_FAILURE_MESSAGE));

        let search = VectorSearchResponse::connect_failure();
        assert!(search.context_text.is_empty());
        assert_eq!(search.error.as_deref(), Some(CONNECT_FAILURE_MESSAGE));
    }
}
