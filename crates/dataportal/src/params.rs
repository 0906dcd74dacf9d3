//! Query parameter normalization.
//!
//! Request structs serialize through serde, so a field's `rename` is the wire
//! name used here and when decoding responses.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::types::{DataportalError, DataportalResult};

/// Flat parameter set sent as the URL query string.
pub type QueryParams = BTreeMap<String, String>;

/// Flatten a request struct into query parameters.
///
/// Null fields are dropped. Strings are trimmed and dropped when nothing is
/// left. Numbers and booleans are kept as-is, zero included.
pub fn normalize<T: Serialize>(request: &T) -> DataportalResult<QueryParams> {
    let value =
        serde_json::to_value(request).map_err(|e| DataportalError::InvalidQuery(e.to_string()))?;

    let Value::Object(fields) = value else {
        return Err(DataportalError::InvalidQuery(
            "Query must serialize to an object".to_string(),
        ));
    };

    let mut params = QueryParams::new();
    for (name, value) in fields {
        match value {
            Value::Null => {}
            Value::String(s) => {
                let trimmed = s.trim();
                if !trimmed.is_empty() {
                    params.insert(name, trimmed.to_string());
                }
            }
            Value::Number(n) => {
                params.insert(name, n.to_string());
            }
            Value::Bool(b) => {
                params.insert(name, b.to_string());
            }
            Value::Array(_) | Value::Object(_) => {
                return Err(DataportalError::InvalidQuery(format!(
                    "Parameter '{name}' must be a scalar value"
                )));
            }
        }
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Default)]
    struct Sample {
        name: Option<String>,
        #[serde(rename = "grupperingsvärde")]
        grupperingsvarde: Option<String>,
        #[serde(rename = "_limit")]
        limit: u32,
        #[serde(rename = "_offset")]
        offset: u32,
        exact: Option<bool>,
    }

    #[test]
    fn test_drops_unset_and_empty() {
        let params = normalize(&Sample {
            name: Some(String::new()),
            ..Default::default()
        })
        .unwrap();
        assert!(!params.contains_key("name"));
        assert!(!params.contains_key("exact"));
        assert!(params.values().all(|v| !v.is_empty()));
    }

    #[test]
    fn test_trims_strings() {
        let params = normalize(&Sample {
            name: Some("  villa \n".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(params["name"], "villa");
    }

    #[test]
    fn test_whitespace_only_is_dropped() {
        let params = normalize(&Sample {
            name: Some("   ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert!(!params.contains_key("name"));
    }

    #[test]
    fn test_zero_is_kept() {
        let params = normalize(&Sample::default()).unwrap();
        assert_eq!(params["_offset"], "0");
        assert_eq!(params["_limit"], "0");
    }

    #[test]
    fn test_wire_names() {
        let params = normalize(&Sample {
            grupperingsvarde: Some("Småhus".to_string()),
            limit: 25,
            exact: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(params["grupperingsvärde"], "Småhus");
        assert_eq!(params["_limit"], "25");
        assert_eq!(params["exact"], "false");
        assert!(!params.contains_key("grupperingsvarde"));
        assert!(!params.contains_key("limit"));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(normalize(&42).is_err());
        assert!(normalize(&serde_json::json!({ "a": [1, 2] })).is_err());
    }
}
