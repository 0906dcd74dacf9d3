//! Lenient decoding helpers for upstream payloads whose value types drift.

use std::fmt;
use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A string field that also accepts numbers, booleans and nested values.
///
/// Riksdagen sends most scalars as strings but not all of them, and the
/// type of a given field is not stable between endpoints. Null becomes an
/// empty string; compound values are kept as their JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LooseString(String);

impl LooseString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for LooseString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self(match value {
            Value::Null => String::new(),
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => other.to_string(),
        }))
    }
}

impl Deref for LooseString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LooseString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LooseString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for LooseString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for LooseString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LooseString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Accept a list, a single object, or null.
///
/// The dokumentlista JSON is converted from XML upstream, so a list with one
/// element arrives as a bare object.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect::<Result<Vec<T>, _>>()
            .map(Some),
        Some(single) => serde_json::from_value(single)
            .map(|item| Some(vec![item]))
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default)]
        value: Option<LooseString>,
        #[serde(default, deserialize_with = "one_or_many")]
        items: Option<Vec<LooseString>>,
    }

    #[test]
    fn test_loose_string_accepts_scalars() {
        let h: Holder = serde_json::from_value(json!({ "value": 42 })).unwrap();
        assert_eq!(h.value.unwrap(), "42");
        let h: Holder = serde_json::from_value(json!({ "value": true })).unwrap();
        assert_eq!(h.value.unwrap(), "true");
        let h: Holder = serde_json::from_value(json!({ "value": null })).unwrap();
        assert!(h.value.is_none());
    }

    #[test]
    fn test_loose_string_keeps_compound_as_json() {
        let h: Holder = serde_json::from_value(json!({ "value": { "a": 1 } })).unwrap();
        assert_eq!(h.value.unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_one_or_many() {
        let h: Holder = serde_json::from_value(json!({ "items": "solo" })).unwrap();
        assert_eq!(h.items.unwrap().len(), 1);
        let h: Holder = serde_json::from_value(json!({ "items": ["a", "b"] })).unwrap();
        assert_eq!(h.items.unwrap().len(), 2);
        let h: Holder = serde_json::from_value(json!({})).unwrap();
        assert!(h.items.is_none());
    }
}
