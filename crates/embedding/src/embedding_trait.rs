use async_trait::async_trait;
use vectorbridge_common::Result;

/// Common trait for embedding backends
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Generate one embedding per input text, preserving input order
    async fn embed(&self, model: &str, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}
