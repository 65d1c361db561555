use clap::{Parser, Subcommand};
use pgmcp_core::ServerConfig;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "pgmcp", version, about = "PostgreSQL MCP server starter kit")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the MCP server.
    Serve(commands::serve::ServeArgs),

    /// Create and seed the demo schema (safe to run repeatedly).
    InitDb,

    /// Check database connectivity.
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Server configuration is loaded before tracing so DEBUG can raise the
    // default filter. Logs go to stderr: under the stdio transport, stdout
    // belongs to the protocol.
    let server_config = ServerConfig::from_env()?;

    let default_filter = if server_config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Serve(args) => commands::serve::execute(args, server_config).await,
        Command::InitDb => commands::init_db::execute().await,
        Command::Check => commands::check::execute().await,
    }
}
