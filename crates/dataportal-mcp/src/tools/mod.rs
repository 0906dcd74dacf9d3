//! MCP tool implementations.

pub mod registry;
pub mod riksdagen_fetch_document;
pub mod riksdagen_kalender_fetch;
pub mod riksdagen_kalender_list;
pub mod riksdagen_ledamot_list;
pub mod riksdagen_list_documents;
pub mod shared;
pub mod skatteverket_get_typkod;
pub mod skatteverket_list_fastighetsskatt;
pub mod skatteverket_list_typkoder;
pub mod skatteverket_search_fastighetsskatt;
pub mod skatteverket_typkod_description;

pub use registry::ToolRegistry;
