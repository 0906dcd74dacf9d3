//! `skatteverket_list_fastighetsskatt_avgift`: page through tax statistics.

use serde_json::Value;

use dataportal::models::FastighetsskattQuery;
use dataportal::Diagnostics;

use crate::context::ToolContext;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

use super::shared::{page_schema, parse_args, PageArgs};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "skatteverket_list_fastighetsskatt_avgift".to_string(),
        description: Some(
            "List all fastighetsskatt and fastighetsavgift statistics with pagination".to_string(),
        ),
        input_schema: page_schema(FastighetsskattQuery::MAX_LIMIT),
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
        .list_fastighetsskatt(page.limit, page.offset, log)
        .await?;
    Ok(ToolCallResult::compact_json(&response))
}
