//! MCP logging levels and `notifications/message` payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use dataportal::Severity;

use super::message::JsonRpcNotification;

pub const LOG_MESSAGE_METHOD: &str = "notifications/message";

/// Syslog-style levels used by `logging/setLevel`, least severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
    Alert,
    Emergency,
}

impl From<Severity> for LogLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => LogLevel::Debug,
            Severity::Info => LogLevel::Info,
            Severity::Warning => LogLevel::Warning,
            Severity::Error => LogLevel::Error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLevelParams {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMessageParams {
    pub level: LogLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logger: Option<String>,
    pub data: Value,
}

impl LogMessageParams {
    pub fn into_notification(self) -> JsonRpcNotification {
        JsonRpcNotification::new(LOG_MESSAGE_METHOD, serde_json::to_value(self).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Emergency);
        assert_eq!(LogLevel::from(Severity::Warning), LogLevel::Warning);
    }

    #[test]
    fn test_set_level_parses_lowercase() {
        let params: SetLevelParams =
            serde_json::from_value(serde_json::json!({ "level": "notice" })).unwrap();
        assert_eq!(params.level, LogLevel::Notice);
        assert!(serde_json::from_value::<SetLevelParams>(serde_json::json!({ "level": "loud" }))
            .is_err());
    }
}
