//! Tasker MCP server implementation in Rust
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! phone-control actions as tools. Each action becomes a single HTTP GET
//! against the Tasker HTTP listener running on the phone; every outcome -
//! success, remote rejection, timeout, unreachable host - is normalized
//! into one uniform result shape.
//!
//! # Example
//!
//! ```rust,no_run
//! use tasker_mcp::{ServerConfig, TaskerMcpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::from_env()?;
//!     let server = TaskerMcpServer::new(config)?;
//!     server.run_stdio().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod tools;
pub mod validation;

pub mod mock;

// Re-export main types
pub use crate::{
    client::{CommandOutcome, PhoneClient, TaskerHttpClient},
    config::{PhoneConfig, ServerConfig},
    error::{Result, TaskerError},
    server::TaskerMcpServer,
};
