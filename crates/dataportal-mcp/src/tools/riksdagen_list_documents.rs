//! `riksdagen_list_documents`: search Riksdagen's dokumentlista.

use serde_json::Value;

use dataportal::models::DokumentQuery;
use dataportal::Diagnostics;

use crate::context::ToolContext;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

use super::shared::{document_filter_schema, lookup_result, parse_args, DocumentFilter};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "riksdagen_list_documents".to_string(),
        description: Some(
            "Search documents in Riksdagen's dokumentlista (motioner, propositioner, betänkanden and more). \
             Returns an empty text when nothing matched."
                .to_string(),
        ),
        input_schema: document_filter_schema(),
    }
}

pub async fn execute(
    args: Value,
    ctx: &ToolContext,
    log: &dyn Diagnostics,
) -> McpResult<ToolCallResult> {
    let filter: DocumentFilter = parse_args(args)?;
    let query = filter.apply(DokumentQuery::documents());

    let lookup = ctx.portal.riksdagen.list_documents(&query, log).await?;
    Ok(lookup_result(lookup))
}
