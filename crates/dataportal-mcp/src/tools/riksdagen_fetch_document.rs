//! `riksdagen_fetch_document`: fetch one document as text, html or json.

use serde_json::Value;

use dataportal::Diagnostics;

use crate::context::ToolContext;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

use super::shared::{fetch_document, fetch_schema};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "riksdagen_fetch_document".to_string(),
        description: Some(
            "Fetch the content or metadata of a single Riksdagen document given a dok_id or URL"
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
