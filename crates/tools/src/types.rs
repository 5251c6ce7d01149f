use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Document submitted for indexing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document ID, unique within a batch
    pub id: String,

    /// Document text
    pub text: String,

    /// Optional metadata; stored as an empty mapping when absent
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

/// One nearest-neighbor match assembled from the store's parallel arrays
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    /// Document ID
    pub id: String,

    /// Document text, if the store returned one
    pub document: Option<String>,

    /// Document metadata, if the store returned one
    pub metadata: Option<Map<String, Value>>,

    /// Distance to the query vector (ascending means nearer)
    pub distance: Option<f64>,
}

/// `embed_text` result
#[derive(Debug, Clone, Serialize)]
pub struct EmbedTextOutput {
    /// Model that produced the embeddings
    pub model: String,

    /// Number of embeddings, equal to the number of input texts
    pub count: usize,

    /// One vector per input text, same order as input
    pub embeddings: Vec<Vec<f32>>,
}

/// `index_documents` result
#[derive(Debug, Clone, Serialize)]
pub struct IndexDocumentsOutput {
    /// Number of documents submitted to the store
    pub indexed: usize,
}

/// `vector_search` result
#[derive(Debug, Clone, Serialize)]
pub struct VectorSearchOutput {
    /// Original query text
    pub query: String,

    /// Effective result count after clamping
    #[serde(rename = "topK")]
    pub top_k: usize,

    /// Hits ordered as returned by the store (nearest first)
    pub hits: Vec<SearchHit>,
}
