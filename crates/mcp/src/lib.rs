//! VectorBridge MCP Server
//!
//! JSON-RPC 2.0 tool server over stdio: registers the three tool
//! operations and translates between the protocol envelope and the
//! operations' plain inputs and outputs

pub mod protocol;
pub mod registry;
pub mod server;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use registry::{tool_definitions, ToolDef};
pub use server::McpServer;
