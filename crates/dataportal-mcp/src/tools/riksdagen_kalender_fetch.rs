//! `riksdagen_kalender_fetch`: fetch one calendar event document.

use serde_json::Value;

use dataportal::Diagnostics;

use crate::context::ToolContext;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

use super::shared::{fetch_document, fetch_schema};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "riksdagen_kalender_fetch".to_string(),
        description: Some(
            "Fetch a specific calendar event or document in text, html or json given a dok_id or URL"
                .to_string(),
        ),
        input_schema: fetch_schema(),
    }
}

pub async fn execute(
    args: Value,
    ctx: &ToolContext,
    log: &dyn Diagnostics,
) -> McpResult<ToolCallResult> {
    fetch_document(args, ctx, log).await
}
