//! `skatteverket_list_taxeringsenhet_typkoder`: page through all typkoder.

use serde_json::Value;

use dataportal::models::TaxeringsenhetQuery;
use dataportal::Diagnostics;

use crate::context::ToolContext;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

use super::shared::{page_schema, parse_args, PageArgs};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "skatteverket_list_taxeringsenhet_typkoder".to_string(),
        description: Some("List all taxeringsenhet typkoder with pagination".to_string()),
        input_schema: page_schema(TaxeringsenhetQuery::MAX_LIMIT),
    }
}

pub async fn execute(
    args: Value,
    ctx: &ToolContext,
    log: &dyn Diagnostics,
) -> McpResult<ToolCallResult> {
    let page: PageArgs = parse_args(args)?;
    let response = ctx
        .portal
        .skatteverket
        .list_typkoder(page.limit, page.offset, log)
        .await?;
    Ok(ToolCallResult::compact_json(&response))
}
