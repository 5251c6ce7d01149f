use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};
use vectorbridge_common::{BridgeError, Result};
use vectorbridge_embedding::EmbeddingClient;
use vectorbridge_store::{QueryResponse, VectorStore};

use crate::types::{
    Document, EmbedTextOutput, IndexDocumentsOutput, SearchHit, VectorSearchOutput,
};

/// Default number of search results
pub const DEFAULT_TOP_K: i64 = 5;

/// Maximum number of search results
pub const MAX_TOP_K: i64 = 20;

/// Effective result count: default 5, clamped into [1, 20].
///
/// Out-of-range values are clamped, never rejected.
pub fn clamp_top_k(top_k: Option<i64>) -> usize {
    top_k.unwrap_or(DEFAULT_TOP_K).clamp(1, MAX_TOP_K) as usize
}

/// Rebuild hits position-wise from the store's sparse result bundle.
///
/// Any of the four parallel arrays may be absent, and individual elements
/// may be null; every position present in `ids` still yields a hit, with
/// null standing in for whatever is missing. Backend order is preserved.
pub fn merge_hits(result: &QueryResponse) -> Vec<SearchHit> {
    let ids = match result.ids.as_ref().and_then(|ids| ids.first()) {
        Some(ids) => ids,
        None => return Vec::new(),
    };

    let documents = result.documents.as_ref().and_then(|d| d.first());
    let metadatas = result.metadatas.as_ref().and_then(|m| m.first());
    let distances = result.distances.as_ref().and_then(|d| d.first());

    ids.iter()
        .enumerate()
        .map(|(i, id)| SearchHit {
            id: id.clone(),
            document: documents.and_then(|col| col.get(i)).cloned().flatten(),
            metadata: metadatas.and_then(|col| col.get(i)).cloned().flatten(),
            distance: distances.and_then(|col| col.get(i)).copied().flatten(),
        })
        .collect()
}

/// Tool operations over the embedding and vector store gateways
pub struct ToolExecutor {
    embedder: Arc<dyn EmbeddingClient>,
    store: Arc<dyn VectorStore>,
    embed_model: String,
    collection: String,
}

impl ToolExecutor {
    /// Create new tool executor
    pub fn new(
        embedder: Arc<dyn EmbeddingClient>,
        store: Arc<dyn VectorStore>,
        embed_model: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            embedder,
            store,
            embed_model: embed_model.into(),
            collection: collection.into(),
        }
    }

    /// Generate embeddings for a batch of texts
    pub async fn embed_text(&self, texts: &[String]) -> Result<EmbedTextOutput> {
        if texts.is_empty() {
            return Err(BridgeError::invalid_input("texts must not be empty"));
        }
        if texts.iter().any(|t| t.is_empty()) {
            return Err(BridgeError::invalid_input("texts must not contain empty strings"));
        }

        let embeddings = self.embedder.embed(&self.embed_model, texts).await?;

        Ok(EmbedTextOutput {
            model: self.embed_model.clone(),
            count: embeddings.len(),
            embeddings,
        })
    }

    /// Embed and index a batch of documents
    pub async fn index_documents(&self, docs: &[Document]) -> Result<IndexDocumentsOutput> {
        if docs.is_empty() {
            return Err(BridgeError::invalid_input("docs must not be empty"));
        }
        for doc in docs {
            if doc.id.is_empty() {
                return Err(BridgeError::invalid_input("document id must not be empty"));
            }
            if doc.text.is_empty() {
                return Err(BridgeError::invalid_input("document text must not be empty"));
            }
        }

        let collection = self.store.get_or_create_collection(&self.collection).await?;

        let ids: Vec<String> = docs.iter().map(|d| d.id.clone()).collect();
        let texts: Vec<String> = docs.iter().map(|d| d.text.clone()).collect();
        // The store must receive a concrete mapping for every document
        let metadatas = docs
            .iter()
            .map(|d| d.metadata.clone().unwrap_or_default())
            .collect();

        let embeddings = self.embedder.embed(&self.embed_model, &texts).await?;

        self.store
            .add(&collection, ids, texts, embeddings, metadatas)
            .await?;

        info!("Indexed {} documents into {}", docs.len(), collection.name);

        Ok(IndexDocumentsOutput { indexed: docs.len() })
    }

    /// Semantic nearest-neighbor search
    pub async fn vector_search(
        &self,
        query: &str,
        top_k: Option<i64>,
        where_filter: Option<Value>,
    ) -> Result<VectorSearchOutput> {
        if query.is_empty() {
            return Err(BridgeError::invalid_input("query must not be empty"));
        }

        let top_k = clamp_top_k(top_k);

        debug!("Searching for: {} (top_k={})", query, top_k);

        let collection = self.store.get_or_create_collection(&self.collection).await?;

        let mut embeddings = self
            .embedder
            .embed(&self.embed_model, &[query.to_string()])
            .await?;
        if embeddings.is_empty() {
            return Err(BridgeError::embedding("No embedding returned for query"));
        }
        let query_embedding = embeddings.remove(0);

        let result = self
            .store
            .query(&collection, query_embedding, top_k, where_filter)
            .await?;

        let hits = merge_hits(&result);

        debug!("Search completed - {} hits", hits.len());

        Ok(VectorSearchOutput {
            query: query.to_string(),
            top_k,
            hits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Map};
    use std::sync::Mutex;
    use vectorbridge_store::Collection;

    /// Embedding backend fake: vector `i` is `[i, i, i]`
    struct FakeEmbedder {
        calls: Mutex<Vec<Vec<String>>>,
    }

    impl FakeEmbedder {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EmbeddingClient for FakeEmbedder {
        async fn embed(&self, _model: &str, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            self.calls.lock().unwrap().push(texts.to_vec());
            Ok(texts
                .iter()
                .enumerate()
                .map(|(i, _)| vec![i as f32; 3])
                .collect())
        }
    }

    #[derive(Debug)]
    struct AddCall {
        ids: Vec<String>,
        documents: Vec<String>,
        embeddings: Vec<Vec<f32>>,
        metadatas: Vec<Map<String, serde_json::Value>>,
    }

    /// Store fake returning a canned query response
    struct FakeStore {
        response: QueryResponse,
        adds: Mutex<Vec<AddCall>>,
        queries: Mutex<Vec<(usize, Option<Value>)>>,
    }

    impl FakeStore {
        fn new(response: QueryResponse) -> Self {
            Self {
                response,
                adds: Mutex::new(Vec::new()),
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl VectorStore for FakeStore {
        async fn get_or_create_collection(&self, name: &str) -> Result<Collection> {
            Ok(Collection {
                id: "00000000-0000-0000-0000-000000000000".to_string(),
                name: name.to_string(),
            })
        }

        async fn add(
            &self,
            _collection: &Collection,
            ids: Vec<String>,
            documents: Vec<String>,
            embeddings: Vec<Vec<f32>>,
            metadatas: Vec<Map<String, serde_json::Value>>,
        ) -> Result<()> {
            self.adds.lock().unwrap().push(AddCall {
                ids,
                documents,
                embeddings,
                metadatas,
            });
            Ok(())
        }

        async fn query(
            &self,
            _collection: &Collection,
            _query_embedding: Vec<f32>,
            n_results: usize,
            where_filter: Option<Value>,
        ) -> Result<QueryResponse> {
            self.queries.lock().unwrap().push((n_results, where_filter));
            Ok(self.response.clone())
        }
    }

    fn executor_with(store: Arc<FakeStore>) -> ToolExecutor {
        ToolExecutor::new(
            Arc::new(FakeEmbedder::new()),
            store,
            "text-embedding-3-small",
            "test-collection",
        )
    }

    #[tokio::test]
    async fn test_embed_text_count_matches_input() {
        let executor = executor_with(Arc::new(FakeStore::new(QueryResponse::default())));
        let texts = vec!["a".to_string(), "b".to_string()];

        let out = executor.embed_text(&texts).await.unwrap();
        assert_eq!(out.count, 2);
        assert_eq!(out.embeddings.len(), 2);
        assert_eq!(out.model, "text-embedding-3-small");
        // Order follows input order
        assert_eq!(out.embeddings[0], vec![0.0, 0.0, 0.0]);
        assert_eq!(out.embeddings[1], vec![1.0, 1.0, 1.0]);
    }

    #[tokio::test]
    async fn test_embed_text_rejects_empty_input() {
        let executor = executor_with(Arc::new(FakeStore::new(QueryResponse::default())));

        let err = executor.embed_text(&[]).await.unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput(_)));

        let err = executor
            .embed_text(&["ok".to_string(), String::new()])
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_index_documents_counts_batch() {
        let store = Arc::new(FakeStore::new(QueryResponse::default()));
        let executor = executor_with(store.clone());

        let mut metadata = Map::new();
        metadata.insert("topic".to_string(), json!("pets"));
        let docs = vec![
            Document {
                id: "x1".to_string(),
                text: "hello".to_string(),
                metadata: None,
            },
            Document {
                id: "x2".to_string(),
                text: "world".to_string(),
                metadata: Some(metadata),
            },
        ];

        let out = executor.index_documents(&docs).await.unwrap();
        assert_eq!(out.indexed, 2);

        let adds = store.adds.lock().unwrap();
        assert_eq!(adds.len(), 1);
        let call = &adds[0];
        assert_eq!(call.ids, vec!["x1", "x2"]);
        assert_eq!(call.documents, vec!["hello", "world"]);
        assert_eq!(call.embeddings.len(), 2);
        // Absent metadata becomes an empty mapping, not an absent value
        assert!(call.metadatas[0].is_empty());
        assert_eq!(call.metadatas[1]["topic"], json!("pets"));
    }

    #[tokio::test]
    async fn test_index_documents_duplicate_ids_pass_through() {
        let store = Arc::new(FakeStore::new(QueryResponse::default()));
        let executor = executor_with(store.clone());

        let docs = vec![
            Document {
                id: "dup".to_string(),
                text: "first".to_string(),
                metadata: None,
            },
            Document {
                id: "dup".to_string(),
                text: "second".to_string(),
                metadata: None,
            },
        ];

        // Duplicates are not deduplicated here; the store decides
        let out = executor.index_documents(&docs).await.unwrap();
        assert_eq!(out.indexed, 2);
        assert_eq!(store.adds.lock().unwrap()[0].ids, vec!["dup", "dup"]);
    }

    #[tokio::test]
    async fn test_index_documents_rejects_invalid_docs() {
        let executor = executor_with(Arc::new(FakeStore::new(QueryResponse::default())));

        let err = executor.index_documents(&[]).await.unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput(_)));

        let docs = vec![Document {
            id: String::new(),
            text: "hello".to_string(),
            metadata: None,
        }];
        let err = executor.index_documents(&docs).await.unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput(_)));

        let docs = vec![Document {
            id: "x1".to_string(),
            text: String::new(),
            metadata: None,
        }];
        let err = executor.index_documents(&docs).await.unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput(_)));
    }

    #[test]
    fn test_clamp_top_k() {
        assert_eq!(clamp_top_k(None), 5);
        assert_eq!(clamp_top_k(Some(0)), 1);
        assert_eq!(clamp_top_k(Some(25)), 20);
        assert_eq!(clamp_top_k(Some(-3)), 1);
        assert_eq!(clamp_top_k(Some(7)), 7);
    }

    #[test]
    fn test_merge_hits_missing_metadatas() {
        let response = QueryResponse {
            ids: Some(vec![vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
            ]]),
            documents: Some(vec![vec![
                Some("doc a".to_string()),
                Some("doc b".to_string()),
                Some("doc c".to_string()),
            ]]),
            metadatas: None,
            distances: Some(vec![vec![Some(0.1), Some(0.2), Some(0.3)]]),
        };

        let hits = merge_hits(&response);
        assert_eq!(hits.len(), 3);
        for hit in &hits {
            assert!(hit.metadata.is_none());
        }
        assert_eq!(hits[0].document.as_deref(), Some("doc a"));
        assert_eq!(hits[2].distance, Some(0.3));
    }

    #[test]
    fn test_merge_hits_partial_nulls() {
        let mut metadata = Map::new();
        metadata.insert("k".to_string(), json!(1));
        let response = QueryResponse {
            ids: Some(vec![vec!["a".to_string(), "b".to_string()]]),
            documents: Some(vec![vec![None, Some("doc b".to_string())]]),
            metadatas: Some(vec![vec![Some(metadata), None]]),
            distances: None,
        };

        let hits = merge_hits(&response);
        assert_eq!(hits.len(), 2);
        assert!(hits[0].document.is_none());
        assert_eq!(hits[0].metadata.as_ref().unwrap()["k"], json!(1));
        assert_eq!(hits[1].document.as_deref(), Some("doc b"));
        assert!(hits[1].metadata.is_none());
        assert!(hits[0].distance.is_none());
    }

    #[test]
    fn test_merge_hits_empty_response() {
        assert!(merge_hits(&QueryResponse::default()).is_empty());

        let response = QueryResponse {
            ids: Some(vec![]),
            ..Default::default()
        };
        assert!(merge_hits(&response).is_empty());
    }

    #[tokio::test]
    async fn test_vector_search_clamps_and_normalizes() {
        // Collection holds a single document; top_k asks for 3
        let response = QueryResponse {
            ids: Some(vec![vec!["only".to_string()]]),
            documents: Some(vec![vec![Some("the one".to_string())]]),
            metadatas: None,
            distances: Some(vec![vec![Some(0.42)]]),
        };
        let store = Arc::new(FakeStore::new(response));
        let executor = executor_with(store.clone());

        let out = executor.vector_search("cats", Some(3), None).await.unwrap();
        assert_eq!(out.query, "cats");
        assert_eq!(out.top_k, 3);
        assert_eq!(out.hits.len(), 1);
        assert_eq!(out.hits[0].id, "only");
        assert!(out.hits[0].metadata.is_none());

        // Store saw the clamped value
        assert_eq!(store.queries.lock().unwrap()[0].0, 3);
    }

    #[tokio::test]
    async fn test_vector_search_clamps_out_of_range() {
        let store = Arc::new(FakeStore::new(QueryResponse::default()));
        let executor = executor_with(store.clone());

        let out = executor.vector_search("q", Some(0), None).await.unwrap();
        assert_eq!(out.top_k, 1);

        let out = executor.vector_search("q", Some(25), None).await.unwrap();
        assert_eq!(out.top_k, 20);

        let out = executor.vector_search("q", None, None).await.unwrap();
        assert_eq!(out.top_k, 5);

        let queries = store.queries.lock().unwrap();
        assert_eq!(queries[0].0, 1);
        assert_eq!(queries[1].0, 20);
        assert_eq!(queries[2].0, 5);
    }

    #[tokio::test]
    async fn test_vector_search_passes_filter_through() {
        let store = Arc::new(FakeStore::new(QueryResponse::default()));
        let executor = executor_with(store.clone());

        let filter = json!({"topic": "pets"});
        executor
            .vector_search("cats", None, Some(filter.clone()))
            .await
            .unwrap();

        let queries = store.queries.lock().unwrap();
        assert_eq!(queries[0].1, Some(filter));
    }

    #[tokio::test]
    async fn test_vector_search_rejects_empty_query() {
        let executor = executor_with(Arc::new(FakeStore::new(QueryResponse::default())));
        let err = executor.vector_search("", None, None).await.unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput(_)));
    }
}
