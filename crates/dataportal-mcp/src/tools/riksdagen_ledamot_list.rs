//! `riksdagen_ledamot_list`: members of parliament (avd=ledamot).

use serde::Deserialize;
use serde_json::{json, Value};

use dataportal::models::{LedamotQuery, SortOrder, DEFAULT_SORT};
use dataportal::Diagnostics;

use crate::context::ToolContext;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

use super::shared::{default_sort, lookup_result, parse_args};

#[derive(Debug, Deserialize)]
struct LedamotParams {
    #[serde(default)]
    sok: Option<String>,
    #[serde(default)]
    datum: Option<String>,
    #[serde(default)]
    tom: Option<String>,
    #[serde(default)]
    p: Option<u32>,
    #[serde(default)]
    pagesize: Option<u32>,
    #[serde(default = "default_sort")]
    sort: String,
    #[serde(default)]
    sortorder: SortOrder,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "riksdagen_ledamot_list".to_string(),
        description: Some(
            "List entries from Riksdagen's dokumentlista for avd=ledamot. \
             Use to search for members of parliament and their metadata."
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "sok": { "type": "string", "description": "Free-text search" },
                "datum": { "type": "string", "description": "From date (YYYY-MM-DD)" },
                "tom": { "type": "string", "description": "To date (YYYY-MM-DD)" },
                "p": { "type": "integer", "minimum": 1, "description": "Page number" },
                "pagesize": { "type": "integer", "minimum": 1 },
                "sort": { "type": "string", "default": DEFAULT_SORT },
                "sortorder": { "type": "string", "enum": ["asc", "desc"], "default": "desc" }
            }
        }),
    }
}

pub async fn execute(
    args: Value,
    ctx: &ToolContext,
    log: &dyn Diagnostics,
) -> McpResult<ToolCallResult> {
    let params: LedamotParams = parse_args(args)?;
    let mut query = LedamotQuery::default();
    query.sok = params.sok;
    query.datum = params.datum;
    query.tom = params.tom;
    query.sort = params.sort;
    query.sortorder = params.sortorder;
    query.p = params.p;
    query.pagesize = params.pagesize;

    let lookup = ctx.portal.riksdagen.list_members(&query, log).await?;
    Ok(lookup_result(lookup))
}
