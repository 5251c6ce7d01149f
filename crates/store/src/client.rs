use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, info};
use vectorbridge_common::{BridgeError, Result};

use crate::store_trait::VectorStore;
use crate::types::{AddRequest, Collection, CreateCollectionRequest, QueryRequest, QueryResponse};

/// Chroma REST API client
#[derive(Debug, Clone)]
pub struct ChromaClient {
    base_url: String,
    client: Client,
}

impl ChromaClient {
    /// Create new Chroma client
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Chroma client initialized: {}", base_url);
        Ok(Self { base_url, client })
    }
}

#[async_trait]
impl VectorStore for ChromaClient {
    async fn get_or_create_collection(&self, name: &str) -> Result<Collection> {
        let url = format!("{}/api/v1/collections", self.base_url);

        debug!("Resolving collection: {}", name);

        let request = CreateCollectionRequest {
            name: name.to_string(),
            get_or_create: true,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BridgeError::store(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BridgeError::store(format!(
                "Chroma API error ({}): {}",
                status, body
            )));
        }

        let collection: Collection = response
            .json()
            .await
            .map_err(|e| BridgeError::store(format!("Failed to parse response: {}", e)))?;

        debug!("Collection resolved: {} ({})", collection.name, collection.id);
        Ok(collection)
    }

    async fn add(
        &self,
        collection: &Collection,
        ids: Vec<String>,
        documents: Vec<String>,
        embeddings: Vec<Vec<f32>>,
        metadatas: Vec<Map<String, Value>>,
    ) -> Result<()> {
        if documents.len() != ids.len()
            || embeddings.len() != ids.len()
            || metadatas.len() != ids.len()
        {
            return Err(BridgeError::store(format!(
                "Array length mismatch: ids={}, documents={}, embeddings={}, metadatas={}",
                ids.len(),
                documents.len(),
                embeddings.len(),
                metadatas.len()
            )));
        }

        let url = format!("{}/api/v1/collections/{}/add", self.base_url, collection.id);

        info!(
            "Adding {} documents to collection {}",
            ids.len(),
            collection.name
        );

        let request = AddRequest {
            ids,
            documents,
            embeddings,
            metadatas,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BridgeError::store(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BridgeError::store(format!(
                "Chroma API error ({}): {}",
                status, body
            )));
        }

        Ok(())
    }

    async fn query(
        &self,
        collection: &Collection,
        query_embedding: Vec<f32>,
        n_results: usize,
        where_filter: Option<Value>,
    ) -> Result<QueryResponse> {
        let url = format!(
            "{}/api/v1/collections/{}/query",
            self.base_url, collection.id
        );

        debug!(
            "Querying collection {} - n_results: {}, filter: {}",
            collection.name,
            n_results,
            where_filter.is_some()
        );

        let request = QueryRequest {
            query_embeddings: vec![query_embedding],
            n_results,
            where_filter,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BridgeError::store(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BridgeError::store(format!(
                "Chroma API error ({}): {}",
                status, body
            )));
        }

        let result: QueryResponse = response
            .json()
            .await
            .map_err(|e| BridgeError::store(format!("Failed to parse response: {}", e)))?;

        Ok(result)
    }
}
