//! The `pgmcp serve` command.

use anyhow::{Context, Result};
use clap::Args;
use pgmcp_core::{DbConfig, ServerConfig, Transport};
use pgmcp_db::Db;
use pgmcp_mcp::McpServer;
use tracing::info;

/// Arguments for `pgmcp serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Transport type (stdio or http). Desktop clients spawn the process
    /// and speak over stdio; remote callers use http.
    #[arg(long, default_value = "stdio")]
    pub transport: String,

    /// HTTP listen port (http transport only). Overrides MCP_HTTP_PORT.
    #[arg(long)]
    pub port: Option<u16>,
}

pub async fn execute(args: ServeArgs, mut server_config: ServerConfig) -> Result<()> {
    server_config.transport = args
        .transport
        .parse::<Transport>()
        .map_err(|e| anyhow::anyhow!(e))?;
    if let Some(port) = args.port {
        server_config.http_port = port;
    }

    let db_config = DbConfig::from_env()?;
    info!(
        host = %db_config.host,
        database = %db_config.database,
        secret_id = ?db_config.secret_id,
        "connecting to upstream database"
    );

    let db = Db::connect(&db_config)
        .await
        .context("failed to connect to database")?;

    let server = McpServer::new(db, server_config.clone());
    info!(
        transport = %server_config.transport,
        tool_count = server.tools().len(),
        read_only = server_config.read_only,
        "MCP server starting"
    );

    server.run().await?;
    Ok(())
}
