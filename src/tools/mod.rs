//! MCP tool implementations for phone control
//!
//! Every tool is a thin call site: validate or clamp the parameters, build
//! the command path, and hand it to the shared [`PhoneClient`]. All network
//! I/O against the phone and all failure classification live behind that
//! trait, so the handlers differ only in the path they pass in.

pub mod apps;
pub mod device;
pub mod media;
pub mod messaging;
pub mod system;
pub mod torch;
pub mod wake;
pub mod weather;

use crate::client::PhoneClient;
use crate::config::ServerConfig;
use std::sync::Arc;

/// Shared tool context for all MCP tools
#[derive(Clone)]
pub struct ToolContext {
    /// Phone client for command execution
    pub client: Arc<dyn PhoneClient>,

    /// Immutable server configuration
    pub config: Arc<ServerConfig>,
}

impl ToolContext {
    /// Create new tool context
    pub fn new(client: Arc<dyn PhoneClient>, config: Arc<ServerConfig>) -> Self {
        Self { client, config }
    }
}
