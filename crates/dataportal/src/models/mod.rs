//! Upstream request and response models.

pub mod loose;
pub mod riksdagen;
pub mod skatteverket;

pub use loose::LooseString;
pub use riksdagen::{
    DokumentDetalj, DokumentLista, DokumentQuery, Dokument, LedamotItem, LedamotLista,
    LedamotQuery, Section, SortOrder, DEFAULT_SORT,
};
pub use skatteverket::{
    FastighetsskattQuery, RowstoreResponse, SkattAvgift, TaxeringsenhetQuery, TypKod, DEFAULT_LIMIT,
};
