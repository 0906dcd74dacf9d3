//! State shared by every tool call, and the per-call client log.

use std::sync::Mutex;

use serde_json::Value;

use dataportal::{Dataportal, Diagnostics, Severity, TracingDiagnostics};

use crate::config::{Config, Service};
use crate::types::{JsonRpcNotification, LogLevel, LogMessageParams};

const LOGGER: &str = "dataportal";

/// Upstream clients plus the mounted service selection. Immutable once built.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub portal: Dataportal,
    pub service: Service,
}

impl ToolContext {
    pub fn new(config: &Config) -> Self {
        Self {
            portal: Dataportal::new(&config.endpoints, config.timeout),
            service: config.service,
        }
    }
}

/// Diagnostics sink for one request.
///
/// Every message goes to `tracing`. Messages at or above the level the client
/// chose with `logging/setLevel` are also kept for delivery as
/// `notifications/message`.
#[derive(Debug, Default)]
pub struct ClientLog {
    threshold: Option<LogLevel>,
    pending: Mutex<Vec<LogMessageParams>>,
}

impl ClientLog {
    pub fn new(threshold: Option<LogLevel>) -> Self {
        Self {
            threshold,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Take buffered messages as notifications.
    pub fn drain(&self) -> Vec<JsonRpcNotification> {
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        pending
            .drain(..)
            .map(LogMessageParams::into_notification)
            .collect()
    }
}

impl Diagnostics for ClientLog {
    fn log(&self, severity: Severity, message: &str) {
        TracingDiagnostics.log(severity, message);

        let level = LogLevel::from(severity);
        if self.threshold.is_some_and(|min| level >= min) {
            self.pending
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(LogMessageParams {
                    level,
                    logger: Some(LOGGER.to_string()),
                    data: Value::String(message.to_string()),
                });
        }
    }
}
