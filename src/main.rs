//! Tasker MCP Server - Main Entry Point

use tasker_mcp::{logging, Result, ServerConfig, TaskerMcpServer};

use clap::{Parser, Subcommand};
use tracing::error;

/// Command line arguments
#[derive(Parser)]
#[command(name = "tasker-mcp-server")]
#[command(about = "Tasker MCP Server in Rust")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run server with stdio transport (for Claude Desktop)
    Stdio,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(logging::LogConfig::from_env()) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            error!("Check TASKER_PHONE_HOST / TASKER_PHONE_PORT / TASKER_TIMEOUT");
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Stdio => {
            let server = TaskerMcpServer::new(config)?;
            server.run_stdio().await
        }
    }
}
