use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Collection handle returned by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    /// Collection UUID assigned by the store
    pub id: String,

    /// Collection name
    pub name: String,
}

/// Create-or-get collection request
#[derive(Debug, Clone, Serialize)]
pub struct CreateCollectionRequest {
    pub name: String,
    pub get_or_create: bool,
}

/// Add request: four parallel arrays keyed by position
#[derive(Debug, Clone, Serialize)]
pub struct AddRequest {
    pub ids: Vec<String>,
    pub documents: Vec<String>,
    pub embeddings: Vec<Vec<f32>>,
    pub metadatas: Vec<Map<String, Value>>,
}

/// Similarity query request
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    /// One query vector per query (we always send exactly one)
    pub query_embeddings: Vec<Vec<f32>>,

    /// Maximum number of neighbors to return
    pub n_results: usize,

    /// Opaque metadata filter, passed through unevaluated
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub where_filter: Option<Value>,
}

/// Raw query result bundle.
///
/// Each field is a per-query list of parallel arrays. Any of the four
/// arrays may be wholly absent, and individual elements may be null;
/// only position `i` ties the arrays together.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub ids: Option<Vec<Vec<String>>>,

    #[serde(default)]
    pub documents: Option<Vec<Vec<Option<String>>>>,

    #[serde(default)]
    pub metadatas: Option<Vec<Vec<Option<Map<String, Value>>>>>,

    #[serde(default)]
    pub distances: Option<Vec<Vec<Option<f64>>>>,
}
