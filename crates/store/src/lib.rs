//! VectorBridge Vector Store Gateway
//!
//! Chroma REST API client behind the `VectorStore` trait

mod client;
mod store_trait;
mod types;

pub use client::ChromaClient;
pub use store_trait::VectorStore;
pub use types::{AddRequest, Collection, CreateCollectionRequest, QueryRequest, QueryResponse};
