//! `skatteverket_get_taxeringsenhet_typkod`: look up one typkod.

use serde::Deserialize;
use serde_json::{json, Value};

use dataportal::models::TaxeringsenhetQuery;
use dataportal::Diagnostics;

use crate::context::ToolContext;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

use super::shared::{lookup_result, parse_args};

#[derive(Debug, Deserialize)]
struct GetTypkodParams {
    typkod: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "skatteverket_get_taxeringsenhet_typkod".to_string(),
        description: Some(
            "Get a single taxeringsenhet typkod by its code. Returns an empty text if the code is unknown."
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "typkod": {
                    "type": "string",
                    "maxLength": TaxeringsenhetQuery::MAX_TYPKOD_LEN,
                    "description": "Type code, e.g. 220"
                }
            },
            "required": ["typkod"]
        }),
    }
}

pub async fn execute(
    args: Value,
    ctx: &ToolContext,
    log: &dyn Diagnostics,
) -> McpResult<ToolCallResult> {
    let params: GetTypkodParams = parse_args(args)?;
    let lookup = ctx
        .portal
        .skatteverket
        .get_typkod(&params.typkod, log)
        .await?;
    Ok(lookup_result(lookup))
}
