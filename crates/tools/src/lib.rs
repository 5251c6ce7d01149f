//! VectorBridge Tool Operations
//!
//! The three tool operations (`embed_text`, `index_documents`,
//! `vector_search`) composing the embedding and vector store gateways

mod executor;
mod types;

pub use executor::{clamp_top_k, merge_hits, ToolExecutor, DEFAULT_TOP_K, MAX_TOP_K};
pub use types::{Document, EmbedTextOutput, IndexDocumentsOutput, SearchHit, VectorSearchOutput};
