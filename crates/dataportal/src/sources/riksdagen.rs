//! Riksdagen open data: dokumentlista listings and document content.

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};

use crate::diagnostics::Diagnostics;
use crate::document::canonicalize_with_origin;
use crate::fetch::{Fetcher, Payload};
use crate::mapper;
use crate::models::{DokumentDetalj, DokumentLista, DokumentQuery, LedamotLista, LedamotQuery};
use crate::params::{normalize, QueryParams};
use crate::types::{DataportalError, DataportalResult, DocumentFormat, Lookup};

const LIST_PATH: &str = "dokumentlista/";
const LIST_KEY: &str = "dokumentlista";

/// Content of a single document.
#[derive(Debug, Clone)]
pub enum DocumentContent {
    /// Body of the `text` or `html` representation.
    Text(String),
    Detail(DokumentDetalj),
}

impl Serialize for DocumentContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DocumentContent::Text(text) => serializer.serialize_str(text),
            DocumentContent::Detail(detail) => detail.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Riksdagen {
    fetcher: Fetcher,
    origin: String,
}

impl Riksdagen {
    pub fn new(fetcher: Fetcher, origin: &str) -> Self {
        Self {
            fetcher,
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn list_url(&self) -> String {
        format!("{}/{LIST_PATH}", self.origin)
    }

    /// Search documents (`avd=dokument`) or calendar events (`avd=kalender`),
    /// depending on how `query` was built.
    pub async fn list_documents(
        &self,
        query: &DokumentQuery,
        diag: &dyn Diagnostics,
    ) -> DataportalResult<Lookup<DokumentLista>> {
        diag.info(&format!(
            "Getting {:?} listing (doktyp={:?}, sok={:?}, rm={:?}, datum={:?}, tom={:?}, organ={:?}, sort={:?}, sortorder={:?})",
            query.section(),
            query.doktyp,
            query.sok,
            query.rm,
            query.datum,
            query.tom,
            query.organ,
            query.sort,
            query.sortorder,
        ));
        self.list(query, "documents", diag).await
    }

    /// List members of parliament (`avd=ledamot`).
    pub async fn list_members(
        &self,
        query: &LedamotQuery,
        diag: &dyn Diagnostics,
    ) -> DataportalResult<Lookup<LedamotLista>> {
        diag.info(&format!(
            "Getting ledamöter (sok={:?}, datum={:?}, tom={:?}, sort={:?}, sortorder={:?}, p={:?}, pagesize={:?})",
            query.sok, query.datum, query.tom, query.sort, query.sortorder, query.p, query.pagesize,
        ));
        self.list(query, "ledamöter", diag).await
    }

    async fn list<Q, T>(
        &self,
        query: &Q,
        noun: &str,
        diag: &dyn Diagnostics,
    ) -> DataportalResult<Lookup<T>>
    where
        Q: Serialize,
        T: DeserializeOwned,
    {
        let url = self.list_url();
        let params = normalize(query)?;
        diag.info(&format!("Making request to {url} with params: {params:?}"));

        let payload = self.fetcher.get_json(&url, &params).await?;
        diag.debug(&format!(
            "Response keys: {:?}",
            mapper::top_level_keys(&payload)
        ));

        let lookup = mapper::collection(&url, payload, LIST_KEY)?;
        if !lookup.is_found() {
            diag.warning(&format!("No {noun} found with the provided filters"));
        }
        Ok(lookup)
    }

    /// Fetch one document by `dok_id` or URL in the requested format.
    pub async fn fetch_document(
        &self,
        reference: &str,
        format: DocumentFormat,
        diag: &dyn Diagnostics,
    ) -> DataportalResult<DocumentContent> {
        let url = match canonicalize_with_origin(reference, format, &self.origin) {
            Ok(url) => url,
            Err(e) => {
                diag.error(&e.to_string());
                return Err(e);
            }
        };
        diag.info(&format!("Fetching document from {url}"));

        match self.fetcher.get(&url, &QueryParams::new(), format).await? {
            Payload::Json(value) => {
                diag.debug(&format!(
                    "Document JSON keys: {:?}",
                    mapper::top_level_keys(&value)
                ));
                if !value.is_object() {
                    return Err(DataportalError::Decode {
                        url,
                        message: "expected a JSON object".to_string(),
                    });
                }
                mapper::decode(&url, value).map(DocumentContent::Detail)
            }
            Payload::Text(text) => {
                diag.debug(&format!("Received {} characters", text.chars().count()));
                Ok(DocumentContent::Text(text))
            }
        }
    }
}
