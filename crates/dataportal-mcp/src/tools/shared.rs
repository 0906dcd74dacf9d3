//! Argument parsing and result shaping shared by several tools.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use dataportal::models::{DokumentQuery, SortOrder, DEFAULT_LIMIT, DEFAULT_SORT};
use dataportal::{DataportalError, Diagnostics, DocumentContent, DocumentFormat, Lookup};

use crate::context::ToolContext;
use crate::types::{McpError, McpResult, ToolCallResult};

pub fn parse_args<T: DeserializeOwned>(args: Value) -> McpResult<T> {
    serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))
}

/// `NotFound` becomes the empty-text reply; anything found is rendered as JSON.
pub fn lookup_result<T: Serialize>(lookup: Lookup<T>) -> ToolCallResult {
    match lookup {
        Lookup::Found(value) => ToolCallResult::compact_json(&value),
        Lookup::NotFound => ToolCallResult::empty(),
    }
}

pub fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

// ─────────────────────── dokumentlista filters ───────────────────────

/// Filters accepted by the document and calendar listings.
#[derive(Debug, Deserialize)]
pub struct DocumentFilter {
    #[serde(default)]
    pub doktyp: Option<String>,
    #[serde(default)]
    pub sok: Option<String>,
    #[serde(default)]
    pub rm: Option<String>,
    #[serde(default)]
    pub datum: Option<String>,
    #[serde(default)]
    pub tom: Option<String>,
    #[serde(default)]
    pub organ: Option<String>,
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default)]
    pub sortorder: SortOrder,
}

impl DocumentFilter {
    pub fn apply(self, mut query: DokumentQuery) -> DokumentQuery {
        query.doktyp = self.doktyp;
        query.sok = self.sok;
        query.rm = self.rm;
        query.datum = self.datum;
        query.tom = self.tom;
        query.organ = self.organ;
        query.sort = self.sort;
        query.sortorder = self.sortorder;
        query
    }
}

pub fn document_filter_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "doktyp": { "type": "string", "description": "Document type code, e.g. mot, prop, bet" },
            "sok": { "type": "string", "description": "Free-text search" },
            "rm": { "type": "string", "description": "Riksmöte, e.g. 2023/24" },
            "datum": { "type": "string", "description": "From date (YYYY-MM-DD)" },
            "tom": { "type": "string", "description": "To date (YYYY-MM-DD)" },
            "organ": { "type": "string", "description": "Organ code, e.g. FiU, KU" },
            "sort": { "type": "string", "default": DEFAULT_SORT },
            "sortorder": { "type": "string", "enum": ["asc", "desc"], "default": "desc" }
        }
    })
}

// ─────────────────────── document content ───────────────────────

#[derive(Debug, Deserialize)]
pub struct FetchArgs {
    pub dok_id_or_url: String,
    #[serde(default)]
    pub fmt: DocumentFormat,
}

pub fn fetch_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "dok_id_or_url": {
                "type": "string",
                "description": "A dok_id such as HD096, or an absolute, protocol-relative or site-relative document URL"
            },
            "fmt": { "type": "string", "enum": ["text", "html", "json"], "default": "text" }
        },
        "required": ["dok_id_or_url"]
    })
}

/// Fetch one document. A bad reference is reported as an empty error result;
/// the core has already logged it at error level.
pub async fn fetch_document(
    args: Value,
    ctx: &ToolContext,
    log: &dyn Diagnostics,
) -> McpResult<ToolCallResult> {
    let params: FetchArgs = parse_args(args)?;

    match ctx
        .portal
        .riksdagen
        .fetch_document(&params.dok_id_or_url, params.fmt, log)
        .await
    {
        Ok(DocumentContent::Text(text)) => Ok(ToolCallResult::text(text)),
        Ok(detail @ DocumentContent::Detail(_)) => Ok(ToolCallResult::json(&detail)),
        Err(DataportalError::InvalidReference(_)) => Ok(ToolCallResult::error(String::new())),
        Err(e) => Err(e.into()),
    }
}

// ─────────────────────── rowstore paging ───────────────────────

#[derive(Debug, Deserialize)]
pub struct PageArgs {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

pub fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

pub fn page_schema(max_limit: u32) -> Value {
    json!({
        "type": "object",
        "properties": {
            "limit": { "type": "integer", "minimum": 1, "maximum": max_limit, "default": DEFAULT_LIMIT },
            "offset": { "type": "integer", "minimum": 0, "default": 0 }
        }
    })
}
