//! HTTP client wrapper for the remote embedding service.

use std::time::Duration;

use crate::config::get_config;
use crate::remote::types::{
    GenerateEmbeddingsRequest, GenerateEmbeddingsResponse, RemoteClientError, VectorSearchRequest,
    VectorSearchResponse,
};
use serde_json::Value;

const GENERATE_EMBEDDINGS_PATH: &str = "/api/generate-embeddings";
const VECTOR_SEARCH_PATH: &str = "/api/vector-search";

const STORE_REJECTION_FALLBACK: &str = "Failed to generate embeddings";
const SEARCH_REJECTION_FALLBACK: &str = "Failed to perform vector search";

/// Lightweight HTTP client for the embedding service.
///
/// Both operations return closed result values: a collaborator rejection is
/// reported through the response's `error` field and a transport failure
/// collapses to [`crate::remote::CONNECT_FAILURE_MESSAGE`]. Neither method
/// can fail at the call site.
pub struct EmbeddingApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl EmbeddingApiClient {
    /// Construct a new client using configuration derived from the environment.
    pub fn new() -> Result<Self, RemoteClientError> {
        let config = get_config();
        let mut builder = reqwest::Client::builder().user_agent("embedmem/0.1");
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let base_url =
            normalize_base_url(&config.embedding_api_url).map_err(RemoteClientError::InvalidUrl)?;
        tracing::debug!(url = %base_url, "Initialized embedding service client");

        Ok(Self { client, base_url })
    }

    /// Construct a client targeting an explicit base URL with default HTTP settings.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, RemoteClientError> {
        let client = reqwest::Client::builder()
            .user_agent("embedmem/0.1")
            .build()?;
        let base_url = normalize_base_url(&base_url.into()).map_err(RemoteClientError::InvalidUrl)?;
        Ok(Self { client, base_url })
    }

    /// Store content remotely, generating embeddings for it.
    ///
    /// The remote call may create or overwrite the page at `request.path`.
    pub async fn generate_embeddings(
        &self,
        request: &GenerateEmbeddingsRequest,
    ) -> GenerateEmbeddingsResponse {
        let url = format!("{}{}", self.base_url, GENERATE_EMBEDDINGS_PATH);
        let response = match self.client.post(&url).json(request).send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%error, path = %request.path, "Embedding service unreachable");
                return GenerateEmbeddingsResponse::connect_failure();
            }
        };

        if response.status().is_success() {
            match response.json::<GenerateEmbeddingsResponse>().await {
                Ok(parsed) => parsed,
                Err(error) => {
                    tracing::warn!(%error, "Malformed store reply from embedding service");
                    GenerateEmbeddingsResponse::connect_failure()
                }
            }
        } else {
            let status = response.status();
            let message = extract_error_message(response)
                .await
                .unwrap_or_else(|| STORE_REJECTION_FALLBACK.to_string());
            tracing::debug!(%status, message, "Embedding service rejected store request");
            GenerateEmbeddingsResponse::failure(message)
        }
    }

    /// Run a vector similarity search against stored content.
    pub async fn vector_search(&self, request: &VectorSearchRequest) -> VectorSearchResponse {
        let url = format!("{}{}", self.base_url, VECTOR_SEARCH_PATH);
        let response = match self.client.post(&url).json(request).send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%error, "Embedding service unreachable");
                return VectorSearchResponse::connect_failure();
            }
        };

        if response.status().is_success() {
            match response.json::<VectorSearchResponse>().await {
                Ok(parsed) => parsed,
                Err(error) => {
                    tracing::warn!(%error, "Malformed search reply from embedding service");
                    VectorSearchResponse::connect_failure()
                }
            }
        } else {
            let status = response.status();
            let message = extract_error_message(response)
                .await
                .unwrap_or_else(|| SEARCH_REJECTION_FALLBACK.to_string());
            tracing::debug!(%status, message, "Embedding service rejected search request");
            VectorSearchResponse::failure(message)
        }
    }
}

/// Pull a structured error message out of a non-2xx reply body, if present.
async fn extract_error_message(response: reqwest::Response) -> Option<String> {
    response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .filter(|message| !message.trim().is_empty())
}

fn normalize_base_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("base URL must not be empty".to_string());
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(format!("base URL must be http(s): {trimmed}"));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
