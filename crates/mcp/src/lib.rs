// MCP (Model Context Protocol) server for the musclesworked.com API
// Exposes exercise and muscle lookups as tools to agent clients over stdio

pub mod codec;
pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::{Args, ConfigError, ServerConfig};
pub use server::McpServer;
