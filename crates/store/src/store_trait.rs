use async_trait::async_trait;
use serde_json::{Map, Value};
use vectorbridge_common::Result;

use crate::types::{Collection, QueryResponse};

/// Common trait for vector store backends
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Return the named collection, creating it if missing (idempotent)
    async fn get_or_create_collection(&self, name: &str) -> Result<Collection>;

    /// Insert or upsert documents; all four arrays must have equal length
    async fn add(
        &self,
        collection: &Collection,
        ids: Vec<String>,
        documents: Vec<String>,
        embeddings: Vec<Vec<f32>>,
        metadatas: Vec<Map<String, Value>>,
    ) -> Result<()>;

    /// Nearest-neighbor query; returns the backend's raw result bundle
    async fn query(
        &self,
        collection: &Collection,
        query_embedding: Vec<f32>,
        n_results: usize,
        where_filter: Option<Value>,
    ) -> Result<QueryResponse>;
}
