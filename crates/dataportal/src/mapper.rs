//! Shaping decoded JSON into typed responses.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{DataportalError, DataportalResult, Lookup};

/// Decode a whole payload into `T`.
pub fn decode<T: DeserializeOwned>(url: &str, value: Value) -> DataportalResult<T> {
    serde_json::from_value(value).map_err(|e| DataportalError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Decode the collection stored under `key`.
///
/// A missing or null key is `NotFound`, not an error.
pub fn collection<T: DeserializeOwned>(
    url: &str,
    value: Value,
    key: &str,
) -> DataportalResult<Lookup<T>> {
    let Value::Object(mut root) = value else {
        return Err(DataportalError::Decode {
            url: url.to_string(),
            message: format!("expected a JSON object holding '{key}'"),
        });
    };

    match root.remove(key) {
        None | Some(Value::Null) => Ok(Lookup::NotFound),
        Some(inner) => decode(url, inner).map(Lookup::Found),
    }
}

/// Top-level keys of an object payload, for debug logging.
pub fn top_level_keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default()
}
