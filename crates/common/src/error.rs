/// VectorBridge error types
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid tool input, rejected before any backend call
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Embedding backend error
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Vector store backend error
    #[error("Vector store error: {0}")]
    Store(String),

    /// Protocol-level error (malformed envelope)
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BridgeError {
    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create embedding backend error
    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        Self::Embedding(msg.into())
    }

    /// Create vector store backend error
    pub fn store<S: Into<String>>(msg: S) -> Self {
        Self::Store(msg.into())
    }

    /// Create protocol error
    pub fn protocol<S: Into<String>>(msg: S) -> Self {
        Self::Protocol(msg.into())
    }
}

// JSON-RPC error code conversion (for the MCP server layer)
impl BridgeError {
    /// Get JSON-RPC error code
    pub fn rpc_error_code(&self) -> i64 {
        match self {
            Self::InvalidInput(_) => -32602,
            Self::Json(_) => -32602,
            Self::Protocol(_) => -32600,
            Self::Config(_) => -32603,
            Self::Embedding(_) => -32603,
            Self::Store(_) => -32603,
            Self::Io(_) => -32603,
            Self::Other(_) => -32603,
        }
    }
}
