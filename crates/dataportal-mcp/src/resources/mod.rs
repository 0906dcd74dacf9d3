//! MCP resources: documentation links for each upstream dataset.

pub mod datasets;
pub mod registry;

pub use registry::ResourceRegistry;
