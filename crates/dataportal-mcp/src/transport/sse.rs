//! HTTP transport: JSON-RPC over `POST /mcp`, plus `GET /health`.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json as AxumJson, Response},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::protocol::ProtocolHandler;
use crate::tools::ToolRegistry;
use crate::types::{JsonRpcMessage, McpError, McpResult, RequestId};

/// HTTP transport for web-based MCP clients.
///
/// Log notifications are not streamed back over HTTP; they still reach
/// `tracing`.
pub struct SseTransport {
    handler: Arc<ProtocolHandler>,
}

impl SseTransport {
    pub fn new(handler: ProtocolHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/mcp", post(handle_request))
            .route("/health", get(handle_health))
            .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
            .with_state(self.handler.clone())
    }

    /// Serve on `addr` until the process stops.
    pub async fn run(&self, addr: &str) -> McpResult<()> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(McpError::Io)?;

        tracing::info!("HTTP transport listening on {addr}");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| McpError::Transport(e.to_string()))
    }
}

async fn handle_request(
    State(handler): State<Arc<ProtocolHandler>>,
    AxumJson(body): AxumJson<serde_json::Value>,
) -> Response {
    let msg: JsonRpcMessage = match serde_json::from_value(body) {
        Ok(msg) => msg,
        Err(e) => {
            let error = McpError::ParseError(e.to_string()).to_json_rpc_error(RequestId::Null);
            return (StatusCode::BAD_REQUEST, AxumJson(error)).into_response();
        }
    };

    match handler.handle_message(msg).await {
        Some(response) => AxumJson(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn handle_health(State(handler): State<Arc<ProtocolHandler>>) -> AxumJson<serde_json::Value> {
    let service = handler.context().service;
    AxumJson(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": service.as_str(),
        "tools": ToolRegistry::list_tools(service).len(),
    }))
}
