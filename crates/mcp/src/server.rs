use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};
use vectorbridge_common::{BridgeError, Result};
use vectorbridge_tools::{Document, ToolExecutor};

use crate::protocol::{
    JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION,
};
use crate::registry::tool_definitions;

/// `tools/call` envelope
#[derive(Debug, Deserialize)]
struct ToolCallParams {
    name: String,

    #[serde(default)]
    arguments: Option<Value>,
}

/// `embed_text` arguments
#[derive(Debug, Deserialize)]
struct EmbedTextParams {
    texts: Vec<String>,
}

/// `index_documents` arguments
#[derive(Debug, Deserialize)]
struct IndexDocumentsParams {
    docs: Vec<Document>,
}

/// `vector_search` arguments
#[derive(Debug, Deserialize)]
struct VectorSearchParams {
    query: String,

    #[serde(rename = "topK", default)]
    top_k: Option<i64>,

    #[serde(rename = "where", default)]
    where_filter: Option<Value>,
}

/// MCP tool server over stdio
pub struct McpServer {
    executor: ToolExecutor,
}

impl McpServer {
    /// Create new MCP server around the tool operations
    pub fn new(executor: ToolExecutor) -> Self {
        Self { executor }
    }

    /// Read newline-delimited JSON-RPC from stdin, write responses to
    /// stdout. Returns when stdin closes.
    pub async fn run_stdio(&self) -> Result<()> {
        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();
        let mut stdout = tokio::io::stdout();

        info!("MCP server listening on stdio");

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(line).await {
                let mut payload = serde_json::to_string(&response)?;
                payload.push('\n');
                stdout.write_all(payload.as_bytes()).await?;
                stdout.flush().await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one raw input line; `None` means nothing should be written
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!("Failed to parse request: {}", e);
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                ));
            }
        };

        self.handle_request(request).await
    }

    /// Dispatch a parsed request
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            debug!("Notification received: {}", request.method);
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);

        let result = match request.method.as_str() {
            "initialize" => Ok(self.initialize_result()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": tool_definitions() })),
            "tools/call" => self.handle_tool_call(request.params).await,
            _ => {
                return Some(JsonRpcResponse::error(
                    id,
                    METHOD_NOT_FOUND,
                    format!("Method not found: {}", request.method),
                ));
            }
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => {
                warn!("{} failed: {}", request.method, e);
                JsonRpcResponse::error(id, e.rpc_error_code(), e.to_string())
            }
        })
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": "vectorbridge",
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }

    async fn handle_tool_call(&self, params: Option<Value>) -> Result<Value> {
        let params = params.ok_or_else(|| BridgeError::invalid_input("Missing params"))?;
        let call: ToolCallParams = serde_json::from_value(params)?;
        let arguments = call.arguments.unwrap_or_else(|| json!({}));

        debug!("Tool call: {}", call.name);

        match call.name.as_str() {
            "embed_text" => {
                let params: EmbedTextParams = serde_json::from_value(arguments)?;
                let output = self.executor.embed_text(&params.texts).await?;
                tool_result(&output)
            }
            "index_documents" => {
                let params: IndexDocumentsParams = serde_json::from_value(arguments)?;
                let output = self.executor.index_documents(&params.docs).await?;
                tool_result(&output)
            }
            "vector_search" => {
                let params: VectorSearchParams = serde_json::from_value(arguments)?;
                let output = self
                    .executor
                    .vector_search(&params.query, params.top_k, params.where_filter)
                    .await?;
                tool_result(&output)
            }
            other => Err(BridgeError::invalid_input(format!("Unknown tool: {}", other))),
        }
    }
}

/// Wrap a tool output as a single text-content payload
fn tool_result<T: Serialize>(output: &T) -> Result<Value> {
    let text = serde_json::to_string_pretty(output)?;
    Ok(json!({ "content": [{ "type": "text", "text": text }] }))
}
