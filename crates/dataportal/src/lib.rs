//! dataportal: request normalization and response shaping for Swedish
//! open-data APIs (Riksdagen, Skatteverket).

pub mod diagnostics;
pub mod document;
pub mod fetch;
pub mod mapper;
pub mod models;
pub mod params;
pub mod sources;
pub mod types;

pub use diagnostics::{Diagnostics, MemoryDiagnostics, Severity, TracingDiagnostics};
pub use document::{canonicalize, canonicalize_with_origin};
pub use fetch::{Fetcher, Payload, DEFAULT_TIMEOUT};
pub use params::{normalize, QueryParams};
pub use sources::{Dataportal, DocumentContent, Endpoints, Riksdagen, Skatteverket};
pub use types::*;
