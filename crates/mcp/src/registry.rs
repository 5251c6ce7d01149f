use serde::Serialize;
use serde_json::{json, Value};

/// Declared tool: name, description, and JSON-schema input shape
#[derive(Debug, Clone, Serialize)]
pub struct ToolDef {
    pub name: String,

    pub description: String,

    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl ToolDef {
    /// Create new tool definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// All tool definitions exposed by this server
pub fn tool_definitions() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "embed_text",
            "Generate OpenAI embeddings for an array of texts.",
            json!({
                "type": "object",
                "properties": {
                    "texts": {
                        "type": "array",
                        "items": {"type": "string", "minLength": 1},
                        "minItems": 1,
                        "description": "Texts to embed."
                    }
                },
                "required": ["texts"]
            }),
        ),
        ToolDef::new(
            "index_documents",
            "Embed and index documents into the vector store.",
            json!({
                "type": "object",
                "properties": {
                    "docs": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "id": {"type": "string", "minLength": 1},
                                "text": {"type": "string", "minLength": 1},
                                "metadata": {"type": "object"}
                            },
                            "required": ["id", "text"]
                        },
                        "minItems": 1,
                        "description": "Documents to embed and store."
                    }
                },
                "required": ["docs"]
            }),
        ),
        ToolDef::new(
            "vector_search",
            "Semantic search using embeddings. Optional metadata filter via `where`.",
            json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "minLength": 1},
                    "topK": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 20,
                        "default": 5,
                        "description": "Result count; out-of-range values are clamped."
                    },
                    "where": {
                        "type": "object",
                        "description": "Metadata filter, evaluated by the vector store."
                    }
                },
                "required": ["query"]
            }),
        ),
    ]
}
