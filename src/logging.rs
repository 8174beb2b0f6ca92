//! Logging configuration
//!
//! Log output goes to stderr: stdout is reserved for JSON-RPC frames when
//! the server runs on the stdio transport.

use crate::error::{Result, TaskerError};
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default log level when RUST_LOG is not set
    pub level: Level,

    /// Include timestamps
    pub timestamps: bool,

    /// Include target module paths
    pub targets: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            timestamps: true,
            targets: false,
        }
    }
}

impl LogConfig {
    /// Build logging configuration from environment
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(level) = std::env::var("TASKER_LOG_LEVEL") {
            if let Ok(level) = level.parse() {
                config.level = level;
            }
        }

        config
    }
}

/// Initialize the global tracing subscriber
pub fn init_logging(config: LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.targets);

    let result = if config.timestamps {
        builder.try_init()
    } else {
        builder.without_time().try_init()
    };

    result.map_err(|e| TaskerError::config(format!("Failed to initialize logging: {e}")))
}
