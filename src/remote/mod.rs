//! Client for the remote embedding/vector-search service.
//!
//! The service is an opaque collaborator reached over HTTP/JSON. This module
//! owns the two remote operations (store and search) and normalizes every
//! outcome into a closed, non-throwing result shape: the rest of the crate
//! branches on response fields and never handles transport errors directly.

mod client;
mod types;

pub use client::EmbeddingApiClient;
pub use types::{
    CONNECT_FAILURE_MESSAGE, GenerateEmbeddingsRequest, GenerateEmbeddingsResponse, PageRecord,
    RemoteClientError, VectorSearchRequest, VectorSearchResponse,
};
