//! `skatteverket_search_fastighetsskatt_avgift`: filtered tax statistics.
//!
//! Filters match whole cells and may be regular expressions, e.g.
//! `gruppering = "Småhus.*"`.

use serde::Deserialize;
use serde_json::{json, Value};

use dataportal::models::{FastighetsskattQuery, DEFAULT_LIMIT};
use dataportal::Diagnostics;

use crate::context::ToolContext;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

use super::shared::{default_limit, parse_args};

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    uppdateringsdatum: Option<String>,
    #[serde(default)]
    gruppering: Option<String>,
    #[serde(default)]
    statistikterm: Option<String>,
    #[serde(default)]
    antal: Option<String>,
    #[serde(default)]
    belopp: Option<String>,
    #[serde(default, alias = "grupperingsvärde")]
    grupperingsvarde: Option<String>,
    #[serde(default)]
    inkomstar: Option<String>,
    #[serde(default = "default_limit")]
    limit: u32,
    #[serde(default)]
    offset: u32,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "skatteverket_search_fastighetsskatt_avgift".to_string(),
        description: Some(
            "Search fastighetsskatt and fastighetsavgift statistics. Every filter matches a whole \
             column value and may be a regular expression."
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "uppdateringsdatum": { "type": "string", "description": "Date the row was updated" },
                "gruppering": { "type": "string", "description": "Grouping, e.g. Småhus" },
                "statistikterm": { "type": "string", "description": "Statistic, e.g. Fastighetsavgift" },
                "antal": { "type": "string", "description": "Count" },
                "belopp": { "type": "string", "description": "Amount in SEK" },
                "grupperingsvarde": { "type": "string", "description": "Value of the grouping" },
                "inkomstar": { "type": "string", "description": "Income year, e.g. 2023" },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": FastighetsskattQuery::MAX_LIMIT,
                    "default": DEFAULT_LIMIT
                },
                "offset": { "type": "integer", "minimum": 0, "default": 0 }
            }
        }),
    }
}

pub async fn execute(
    args: Value,
    ctx: &ToolContext,
    log: &dyn Diagnostics,
) -> McpResult<ToolCallResult> {
    let params: SearchParams = parse_args(args)?;
    let query = FastighetsskattQuery {
        uppdateringsdatum: params.uppdateringsdatum,
        gruppering: params.gruppering,
        statistikterm: params.statistikterm,
        antal: params.antal,
        belopp: params.belopp,
        grupperingsvarde: params.grupperingsvarde,
        inkomstar: params.inkomstar,
        ..FastighetsskattQuery::page(params.limit, params.offset)
    };

    let response = ctx
        .portal
        .skatteverket
        .search_fastighetsskatt(&query, log)
        .await?;
    Ok(ToolCallResult::compact_json(&response))
}
