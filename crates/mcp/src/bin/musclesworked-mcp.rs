// Standalone MCP server binary

use anyhow::Result;
use clap::Parser;
use musclesworked_mcp::config::{Args, ServerConfig};
use musclesworked_mcp::server::McpServer;
use musclesworked_mcp::tools::{register_tools, ToolRegistry};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_args(Args::parse())?;
    let client = config.client()?;

    tracing::info!(base_url = %client.base_url(), "musclesworked MCP server starting");

    let mut registry = ToolRegistry::new();
    register_tools(&mut registry, &client);
    tracing::info!("Registered {} tools", registry.len());

    McpServer::new(registry).start().await?;

    Ok(())
}
