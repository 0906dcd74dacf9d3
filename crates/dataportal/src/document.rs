//! Document reference canonicalization.
//!
//! A reference is either a bare `dok_id` (`HD096`) or a URL that is
//! absolute, protocol-relative (`//host/...`) or root-relative (`/...`).
//! Every form resolves to one URL on the content endpoint with the
//! requested extension.

use url::Url;

use crate::types::{DataportalError, DataportalResult, DocumentFormat};

/// Origin of the Riksdagen content host.
pub const CONTENT_ORIGIN: &str = "https://data.riksdagen.se";

/// Path directory holding document content.
pub const DOCUMENT_DIR: &str = "dokument";

const DOCUMENT_SEGMENT: &str = "/dokument/";
const LEGACY_TEXT_EXTENSION: &str = "txt";

/// Canonicalize against the public content host.
pub fn canonicalize(reference: &str, format: DocumentFormat) -> DataportalResult<String> {
    canonicalize_with_origin(reference, format, CONTENT_ORIGIN)
}

/// Canonicalize a reference, resolving relative forms against `origin`.
pub fn canonicalize_with_origin(
    reference: &str,
    format: DocumentFormat,
    origin: &str,
) -> DataportalResult<String> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(DataportalError::InvalidReference(
            "Missing dok_id or document URL".to_string(),
        ));
    }

    let mut url = if has_http_scheme(reference) {
        parse(reference)?
    } else if reference.starts_with("//") {
        parse(&format!("https:{reference}"))?
    } else if reference.starts_with('/') {
        parse(&format!("{}{reference}", origin.trim_end_matches('/')))?
    } else {
        document_url(origin, reference, format)?
    };

    if url.path().contains(DOCUMENT_SEGMENT) {
        if let Some(path) = coerce_extension(url.path(), format) {
            url.set_path(&path);
        }
    }

    Ok(url.into())
}

fn has_http_scheme(value: &str) -> bool {
    let lower = value.get(..8).unwrap_or(value).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn parse(raw: &str) -> DataportalResult<Url> {
    Url::parse(raw).map_err(|e| DataportalError::InvalidReference(format!("{raw}: {e}")))
}

fn document_url(origin: &str, dok_id: &str, format: DocumentFormat) -> DataportalResult<Url> {
    let mut url = parse(origin)?;
    url.path_segments_mut()
        .map_err(|_| {
            DataportalError::InvalidReference(format!("{origin} cannot hold a document path"))
        })?
        .pop_if_empty()
        .push(DOCUMENT_DIR)
        .push(&format!("{dok_id}.{}", format.extension()));
    Ok(url)
}

/// Swap a known extension on the last path segment for the requested one.
/// `.txt` counts as `.text`.
fn coerce_extension(path: &str, format: DocumentFormat) -> Option<String> {
    let (dir, file) = path.rsplit_once('/')?;
    let (stem, ext) = file.rsplit_once('.')?;
    let ext = if ext == LEGACY_TEXT_EXTENSION {
        DocumentFormat::Text.extension()
    } else {
        ext
    };
    DocumentFormat::from_extension(ext)?;
    Some(format!("{dir}/{stem}.{}", format.extension()))
}
