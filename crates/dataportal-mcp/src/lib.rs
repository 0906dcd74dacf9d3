//! Dataportal MCP server: Swedish open data (Riksdagen, Skatteverket) as LLM tools.

pub mod config;
pub mod context;
pub mod protocol;
pub mod repl;
pub mod resources;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::{Config, ConfigOverrides, Service};
pub use context::{ClientLog, ToolContext};
pub use protocol::ProtocolHandler;
pub use transport::StdioTransport;
