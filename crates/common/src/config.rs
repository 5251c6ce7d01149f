use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// VectorBridge application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenAI API key (required)
    pub openai_api_key: String,

    /// OpenAI API base URL
    pub openai_base_url: String,

    /// Embedding model name
    pub embed_model: String,

    /// Chroma server base URL
    pub chroma_url: String,

    /// Chroma collection name
    pub collection: String,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, BridgeError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| BridgeError::config("Missing OPENAI_API_KEY in env"))?;

        let config = Self {
            openai_api_key,
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            embed_model: std::env::var("OPENAI_EMBED_MODEL")
                .unwrap_or_else(|_| "text-embedding-3-small".to_string()),
            chroma_url: std::env::var("CHROMA_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            collection: std::env::var("CHROMA_COLLECTION")
                .unwrap_or_else(|_| "vectorbridge".to_string()),
            log_dir: std::env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.openai_api_key.is_empty() {
            return Err(BridgeError::config("OpenAI API key cannot be empty"));
        }

        if self.embed_model.is_empty() {
            return Err(BridgeError::config("Embedding model name cannot be empty"));
        }

        if !self.openai_base_url.starts_with("http://")
            && !self.openai_base_url.starts_with("https://")
        {
            return Err(BridgeError::config(
                "OpenAI base URL must start with http:// or https://",
            ));
        }

        if !self.chroma_url.starts_with("http://") && !self.chroma_url.starts_with("https://") {
            return Err(BridgeError::config(
                "Chroma base URL must start with http:// or https://",
            ));
        }

        if self.collection.is_empty() {
            return Err(BridgeError::config("Collection name cannot be empty"));
        }

        Ok(())
    }
}
