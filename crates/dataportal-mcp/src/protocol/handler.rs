//! Request dispatcher: routes JSON-RPC messages to tools and resources.

use std::sync::Arc;
use tokio::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::context::{ClientLog, ToolContext};
use crate::resources::ResourceRegistry;
use crate::tools::ToolRegistry;
use crate::types::*;

use super::negotiation::NegotiatedCapabilities;
use super::validator::validate_request;

/// Result of handling one inbound message.
#[derive(Debug, Default)]
pub struct Outcome {
    /// `notifications/message` entries to send before the response.
    pub notifications: Vec<JsonRpcNotification>,
    pub response: Option<Value>,
}

pub struct ProtocolHandler {
    context: Arc<ToolContext>,
    capabilities: Arc<Mutex<NegotiatedCapabilities>>,
    log_level: Arc<Mutex<Option<LogLevel>>>,
}

impl ProtocolHandler {
    pub fn new(context: Arc<ToolContext>) -> Self {
        Self {
            context,
            capabilities: Arc::new(Mutex::new(NegotiatedCapabilities::default())),
            log_level: Arc::new(Mutex::new(None)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(ToolContext::new(config)))
    }

    pub fn context(&self) -> &ToolContext {
        &self.context
    }

    /// Handle a message and return only the response.
    pub async fn handle_message(&self, msg: JsonRpcMessage) -> Option<Value> {
        self.handle(msg).await.response
    }

    pub async fn handle(&self, msg: JsonRpcMessage) -> Outcome {
        match msg {
            JsonRpcMessage::Request(req) => self.handle_request(req).await,
            JsonRpcMessage::Notification(notif) => {
                self.handle_notification(notif).await;
                Outcome::default()
            }
            _ => {
                tracing::warn!("Received unexpected message type from client");
                Outcome::default()
            }
        }
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> Outcome {
        if let Err(e) = validate_request(&request) {
            return Outcome {
                notifications: Vec::new(),
                response: Some(error_value(&e, request.id)),
            };
        }

        let log = ClientLog::new(*self.log_level.lock().await);
        let id = request.id.clone();

        let response = match self.dispatch_request(&request, &log).await {
            Ok(value) => serde_json::to_value(JsonRpcResponse::new(id, value)).unwrap_or_default(),
            Err(e) => {
                tracing::debug!("{} failed: {e}", request.method);
                error_value(&e, id)
            }
        };

        Outcome {
            notifications: log.drain(),
            response: Some(response),
        }
    }

    async fn dispatch_request(
        &self,
        request: &JsonRpcRequest,
        log: &ClientLog,
    ) -> McpResult<Value> {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.params.clone()).await,
            "shutdown" => {
                tracing::info!("Shutdown requested");
                Ok(empty_object())
            }
            "ping" => Ok(empty_object()),

            "logging/setLevel" => self.handle_set_level(request.params.clone()).await,

            "tools/list" => to_value(ToolListResult {
                tools: ToolRegistry::list_tools(self.context.service),
                next_cursor: None,
            }),
            "tools/call" => self.handle_tools_call(request.params.clone(), log).await,

            "resources/list" => to_value(ResourceListResult {
                resources: ResourceRegistry::list_resources(self.context.service),
                next_cursor: None,
            }),
            "resources/templates/list" => to_value(ResourceTemplateListResult {
                resource_templates: ResourceRegistry::list_templates(),
                next_cursor: None,
            }),
            "resources/read" => {
                let params: ResourceReadParams =
                    required_params(request.params.clone(), "Resource read")?;
                to_value(ResourceRegistry::read(&params.uri, self.context.service)?)
            }

            _ => Err(McpError::MethodNotFound(request.method.clone())),
        }
    }

    async fn handle_notification(&self, notification: JsonRpcNotification) {
        match notification.method.as_str() {
            "initialized" | "notifications/initialized" => {
                self.capabilities.lock().await.mark_initialized();
            }
            "notifications/cancelled" | "$/cancelRequest" => {
                tracing::info!("Received cancellation notification");
            }
            _ => {
                tracing::debug!("Unknown notification: {}", notification.method);
            }
        }
    }

    async fn handle_initialize(&self, params: Option<Value>) -> McpResult<Value> {
        let init_params: InitializeParams = required_params(params, "Initialize")?;
        let result = self.capabilities.lock().await.negotiate(init_params)?;
        to_value(result)
    }

    async fn handle_set_level(&self, params: Option<Value>) -> McpResult<Value> {
        let params: SetLevelParams = required_params(params, "logging/setLevel")?;
        tracing::info!("Client log level set to {:?}", params.level);
        *self.log_level.lock().await = Some(params.level);
        Ok(empty_object())
    }

    async fn handle_tools_call(&self, params: Option<Value>, log: &ClientLog) -> McpResult<Value> {
        let call_params: ToolCallParams = required_params(params, "Tool call")?;

        tracing::info!("Calling tool {}", call_params.name);
        let result =
            ToolRegistry::call(&call_params.name, call_params.arguments, &self.context, log)
                .await?;

        to_value(result)
    }
}

fn required_params<T: DeserializeOwned>(params: Option<Value>, what: &str) -> McpResult<T> {
    params
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| McpError::InvalidParams(e.to_string()))?
        .ok_or_else(|| McpError::InvalidParams(format!("{what} params required")))
}

fn to_value(value: impl serde::Serialize) -> McpResult<Value> {
    serde_json::to_value(value).map_err(|e| McpError::InternalError(e.to_string()))
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

fn error_value(error: &McpError, id: RequestId) -> Value {
    serde_json::to_value(error.to_json_rpc_error(id)).unwrap_or_default()
}
