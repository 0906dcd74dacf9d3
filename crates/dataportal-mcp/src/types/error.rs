//! Error types and JSON-RPC error codes for the MCP server.

use serde_json::{json, Value};

use dataportal::DataportalError;

use super::message::{JsonRpcError, JsonRpcErrorObject, RequestId, JSONRPC_VERSION};

/// Standard JSON-RPC 2.0 error codes.
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// MCP-specific error codes.
pub mod mcp_error_codes {
    pub const RESOURCE_NOT_FOUND: i32 = -32802;
    pub const TOOL_NOT_FOUND: i32 = -32803;
    /// Upstream open-data API failed: transport, non-2xx status or bad JSON.
    pub const UPSTREAM_ERROR: i32 = -32850;
}

/// All errors that can occur in the MCP server.
#[derive(thiserror::Error, Debug)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Upstream error: {message}")]
    Upstream {
        message: String,
        url: Option<String>,
        status: Option<u16>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    pub fn code(&self) -> i32 {
        use error_codes::*;
        use mcp_error_codes::*;
        match self {
            McpError::ParseError(_) | McpError::Json(_) => PARSE_ERROR,
            McpError::InvalidRequest(_) => INVALID_REQUEST,
            McpError::MethodNotFound(_) => METHOD_NOT_FOUND,
            McpError::InvalidParams(_) => INVALID_PARAMS,
            McpError::ResourceNotFound(_) => RESOURCE_NOT_FOUND,
            McpError::ToolNotFound(_) => TOOL_NOT_FOUND,
            McpError::Upstream { .. } => UPSTREAM_ERROR,
            McpError::InternalError(_)
            | McpError::Config(_)
            | McpError::Transport(_)
            | McpError::Io(_) => INTERNAL_ERROR,
        }
    }

    /// Structured detail attached to the JSON-RPC error object.
    pub fn data(&self) -> Option<Value> {
        match self {
            McpError::Upstream { url, status, .. } if url.is_some() || status.is_some() => {
                Some(json!({ "url": url, "status": status }))
            }
            _ => None,
        }
    }

    pub fn to_json_rpc_error(&self, id: RequestId) -> JsonRpcError {
        JsonRpcError {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error: JsonRpcErrorObject {
                code: self.code(),
                message: self.to_string(),
                data: self.data(),
            },
        }
    }
}

impl From<DataportalError> for McpError {
    fn from(e: DataportalError) -> Self {
        let message = e.to_string();
        match e {
            DataportalError::InvalidReference(_) | DataportalError::InvalidQuery(_) => {
                McpError::InvalidParams(message)
            }
            DataportalError::Transport { url, .. } | DataportalError::Decode { url, .. } => {
                McpError::Upstream {
                    message,
                    url: Some(url),
                    status: None,
                }
            }
            DataportalError::Status { url, status, .. } => McpError::Upstream {
                message,
                url: Some(url),
                status: Some(status),
            },
        }
    }
}

pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_upstream_with_data() {
        let err: McpError = DataportalError::Status {
            url: "https://data.riksdagen.se/dokumentlista/".into(),
            status: 502,
            body: "Bad Gateway".into(),
        }
        .into();

        assert_eq!(err.code(), mcp_error_codes::UPSTREAM_ERROR);
        let rpc = err.to_json_rpc_error(RequestId::Number(7));
        assert_eq!(rpc.error.data.unwrap()["status"], 502);
    }

    #[test]
    fn test_query_errors_are_invalid_params() {
        let err: McpError = DataportalError::InvalidQuery("limit".into()).into();
        assert_eq!(err.code(), error_codes::INVALID_PARAMS);
        assert!(err.data().is_none());
    }
}
