//! Skatteverket rowstore models and queries.

use serde::{Deserialize, Serialize};

use super::loose::LooseString;
use crate::types::{DataportalError, DataportalResult};

pub const DEFAULT_LIMIT: u32 = 10;

/// Paged rowstore response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowstoreResponse<T> {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(rename = "resultCount", default)]
    pub result_count: Option<u64>,
    #[serde(default)]
    pub offset: u64,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(rename = "queryTime", default)]
    pub query_time: Option<u64>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// A taxeringsenhet type code and its description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypKod {
    #[serde(default)]
    pub typkod: LooseString,
    #[serde(default)]
    pub beskrivning: LooseString,
}

/// One row of fastighetsskatt / fastighetsavgift statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkattAvgift {
    pub uppdateringsdatum: LooseString,
    pub gruppering: LooseString,
    pub antal: LooseString,
    pub statistikterm: LooseString,
    pub belopp: LooseString,
    pub inkomstar: LooseString,
    #[serde(rename = "grupperingsvärde")]
    pub grupperingsvarde: LooseString,
}

fn check_limit(limit: u32, max: u32) -> DataportalResult<()> {
    if limit == 0 || limit > max {
        return Err(DataportalError::InvalidQuery(format!(
            "limit must be between 1 and {max}, got {limit}"
        )));
    }
    Ok(())
}

fn check_len(field: &str, value: Option<&str>, max: usize) -> DataportalResult<()> {
    let len = value.map(|v| v.trim().chars().count()).unwrap_or(0);
    if len > max {
        return Err(DataportalError::InvalidQuery(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}

/// Query against the taxeringsenhet typkod dataset.
#[derive(Debug, Clone, Serialize)]
pub struct TaxeringsenhetQuery {
    pub typkod: Option<String>,
    pub beskrivning: Option<String>,
    #[serde(rename = "_limit")]
    pub limit: u32,
    #[serde(rename = "_offset")]
    pub offset: u32,
    #[serde(rename = "_callback")]
    pub callback: Option<String>,
}

impl TaxeringsenhetQuery {
    pub const MAX_LIMIT: u32 = 100;
    pub const MAX_TYPKOD_LEN: usize = 5;
    pub const MAX_BESKRIVNING_LEN: usize = 100;

    pub fn page(limit: u32, offset: u32) -> Self {
        Self {
            typkod: None,
            beskrivning: None,
            limit,
            offset,
            callback: None,
        }
    }

    pub fn with_typkod(mut self, typkod: impl Into<String>) -> Self {
        self.typkod = Some(typkod.into());
        self
    }

    pub fn with_beskrivning(mut self, beskrivning: impl Into<String>) -> Self {
        self.beskrivning = Some(beskrivning.into());
        self
    }

    pub fn validate(&self) -> DataportalResult<()> {
        check_limit(self.limit, Self::MAX_LIMIT)?;
        check_len("typkod", self.typkod.as_deref(), Self::MAX_TYPKOD_LEN)?;
        check_len(
            "beskrivning",
            self.beskrivning.as_deref(),
            Self::MAX_BESKRIVNING_LEN,
        )
    }
}

impl Default for TaxeringsenhetQuery {
    fn default() -> Self {
        Self::page(DEFAULT_LIMIT, 0)
    }
}

/// Query against the fastighetsskatt / fastighetsavgift dataset.
///
/// Every filter matches whole cells and may be a regular expression.
#[derive(Debug, Clone, Serialize)]
pub struct FastighetsskattQuery {
    pub uppdateringsdatum: Option<String>,
    pub gruppering: Option<String>,
    pub statistikterm: Option<String>,
    pub antal: Option<String>,
    pub belopp: Option<String>,
    #[serde(rename = "grupperingsvärde")]
    pub grupperingsvarde: Option<String>,
    pub inkomstar: Option<String>,
    #[serde(rename = "_limit")]
    pub limit: u32,
    #[serde(rename = "_offset")]
    pub offset: u32,
}

impl FastighetsskattQuery {
    pub const MAX_LIMIT: u32 = 500;

    pub fn page(limit: u32, offset: u32) -> Self {
        Self {
            uppdateringsdatum: None,
            gruppering: None,
            statistikterm: None,
            antal: None,
            belopp: None,
            grupperingsvarde: None,
            inkomstar: None,
            limit,
            offset,
        }
    }

    pub fn validate(&self) -> DataportalResult<()> {
        check_limit(self.limit, Self::MAX_LIMIT)
    }
}

impl Default for FastighetsskattQuery {
    fn default() -> Self {
        Self::page(DEFAULT_LIMIT, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::normalize;
    use serde_json::json;

    #[test]
    fn test_rowstore_defaults() {
        let response: RowstoreResponse<TypKod> = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.limit, DEFAULT_LIMIT);
        assert_eq!(response.offset, 0);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_rowstore_decodes_rows() {
        let response: RowstoreResponse<SkattAvgift> = serde_json::from_value(json!({
            "next": "https://example.test/?_offset=10",
            "resultCount": 42,
            "offset": 0,
            "limit": 10,
            "queryTime": 3,
            "results": [{ "gruppering": "Småhus", "grupperingsvärde": "Totalt", "antal": 12 }]
        }))
        .unwrap();
        assert_eq!(response.result_count, Some(42));
        let row = &response.results[0];
        assert_eq!(row.grupperingsvarde, "Totalt");
        assert_eq!(row.antal, "12");
        assert_eq!(row.belopp, "");
    }

    #[test]
    fn test_taxeringsenhet_params() {
        let query = TaxeringsenhetQuery::page(1, 0).with_typkod(" 220 ");
        query.validate().unwrap();
        let params = normalize(&query).unwrap();
        assert_eq!(params["typkod"], "220");
        assert_eq!(params["_limit"], "1");
        assert_eq!(params["_offset"], "0");
        assert!(!params.contains_key("_callback"));
        assert!(!params.contains_key("beskrivning"));
    }

    #[test]
    fn test_taxeringsenhet_bounds() {
        assert!(TaxeringsenhetQuery::page(0, 0).validate().is_err());
        assert!(TaxeringsenhetQuery::page(101, 0).validate().is_err());
        assert!(TaxeringsenhetQuery::page(100, 0).validate().is_ok());
        assert!(TaxeringsenhetQuery::default()
            .with_typkod("123456")
            .validate()
            .is_err());
    }

    #[test]
    fn test_fastighetsskatt_params() {
        let mut query = FastighetsskattQuery::page(500, 20);
        query.grupperingsvarde = Some("Hyreshus".to_string());
        query.belopp = Some(String::new());
        query.validate().unwrap();

        let params = normalize(&query).unwrap();
        assert_eq!(params["grupperingsvärde"], "Hyreshus");
        assert_eq!(params["_limit"], "500");
        assert_eq!(params["_offset"], "20");
        assert!(!params.contains_key("belopp"));
        assert!(FastighetsskattQuery::page(501, 0).validate().is_err());
    }
}
