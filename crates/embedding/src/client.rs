use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use vectorbridge_common::{BridgeError, Result};

use crate::embedding_trait::EmbeddingClient;
use crate::types::{EmbeddingsRequest, EmbeddingsResponse};

/// OpenAI embeddings API client
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl OpenAiClient {
    /// Create new OpenAI client
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("OpenAI client initialized: {}", base_url);
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            client,
        })
    }
}

#[async_trait]
impl EmbeddingClient for OpenAiClient {
    async fn embed(&self, model: &str, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let url = format!("{}/embeddings", self.base_url);

        debug!(
            "Sending embeddings request - Model: {}, Inputs: {}",
            model,
            texts.len()
        );

        let request = EmbeddingsRequest {
            model: model.to_string(),
            input: texts.to_vec(),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| BridgeError::embedding(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BridgeError::embedding(format!(
                "OpenAI API error ({}): {}",
                status, body
            )));
        }

        let result: EmbeddingsResponse = response
            .json()
            .await
            .map_err(|e| BridgeError::embedding(format!("Failed to parse response: {}", e)))?;

        // Sort by index so output order matches input order
        let mut data = result.data;
        data.sort_by_key(|d| d.index);

        if data.len() != texts.len() {
            return Err(BridgeError::embedding(format!(
                "Expected {} embeddings, got {}",
                texts.len(),
                data.len()
            )));
        }

        debug!(
            "Received {} embeddings, dimension {}",
            data.len(),
            data.first().map(|d| d.embedding.len()).unwrap_or(0)
        );

        Ok(data.into_iter().map(|d| d.embedding).collect())
    }
}
