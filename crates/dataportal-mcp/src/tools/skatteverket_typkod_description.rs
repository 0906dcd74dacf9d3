//! `skatteverket_get_taxeringsenhet_typkod_description`: typkoder by description.

use serde::Deserialize;
use serde_json::{json, Value};

use dataportal::models::TaxeringsenhetQuery;
use dataportal::Diagnostics;

use crate::context::ToolContext;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

use super::shared::parse_args;

#[derive(Debug, Deserialize)]
struct DescriptionParams {
    description: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "skatteverket_get_taxeringsenhet_typkod_description".to_string(),
        description: Some(
            "Get taxeringsenhet typkoder by their description. Returns up to 100 matches, \
             or an empty list."
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "description": {
                    "type": "string",
                    "maxLength": TaxeringsenhetQuery::MAX_BESKRIVNING_LEN,
                    "description": "Description to match, e.g. Lantbruksenhet"
                }
            },
            "required": ["description"]
        }),
    }
}

pub async fn execute(
    args: Value,
    ctx: &ToolContext,
    log: &dyn Diagnostics,
) -> McpResult<ToolCallResult> {
    let params: DescriptionParams = parse_args(args)?;
    let rows = ctx
        .portal
        .skatteverket
        .typkoder_by_description(&params.description, log)
        .await?;
    Ok(ToolCallResult::json(&rows))
}
