use serde::{Deserialize, Serialize};

/// OpenAI embeddings request
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingsRequest {
    /// Model name (e.g., "text-embedding-3-small")
    pub model: String,

    /// Input texts (the endpoint accepts an array of strings)
    pub input: Vec<String>,
}

/// OpenAI embeddings response
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingsResponse {
    /// One entry per input text
    pub data: Vec<EmbeddingData>,

    /// Model that produced the embeddings
    pub model: String,

    /// Token usage
    #[serde(default)]
    pub usage: Option<EmbeddingUsage>,
}

/// Single embedding entry
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingData {
    /// Embedding vector
    pub embedding: Vec<f32>,

    /// Position of the corresponding input text
    pub index: usize,
}

/// Token usage
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingUsage {
    pub prompt_tokens: u32,
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_embeddings_response() {
        let json = r#"{
            "object": "list",
            "data": [
                {"object": "embedding", "embedding": [0.1, 0.2, 0.3], "index": 0},
                {"object": "embedding", "embedding": [0.4, 0.5, 0.6], "index": 1}
            ],
            "model": "text-embedding-3-small",
            "usage": {"prompt_tokens": 4, "total_tokens": 4}
        }"#;

        let res: EmbeddingsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.data.len(), 2);
        assert_eq!(res.data[0].embedding, vec![0.1, 0.2, 0.3]);
        assert_eq!(res.data[1].index, 1);
        assert_eq!(res.model, "text-embedding-3-small");
        assert_eq!(res.usage.unwrap().total_tokens, 4);
    }

    #[test]
    fn test_deserialize_without_usage() {
        let json = r#"{"data": [], "model": "text-embedding-3-small"}"#;
        let res: EmbeddingsResponse = serde_json::from_str(json).unwrap();
        assert!(res.data.is_empty());
        assert!(res.usage.is_none());
    }

    #[test]
    fn test_serialize_request() {
        let request = EmbeddingsRequest {
            model: "text-embedding-3-small".to_string(),
            input: vec!["hello".to_string()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "text-embedding-3-small");
        assert_eq!(json["input"][0], "hello");
    }
}
