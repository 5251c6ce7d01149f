//! VectorBridge Embedding Gateway
//!
//! OpenAI embeddings API client behind the `EmbeddingClient` trait

mod client;
mod embedding_trait;
mod types;

pub use client::OpenAiClient;
pub use embedding_trait::EmbeddingClient;
pub use types::{EmbeddingData, EmbeddingUsage, EmbeddingsRequest, EmbeddingsResponse};
