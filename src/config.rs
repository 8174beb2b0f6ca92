//! Configuration management for the Tasker MCP server
//!
//! All configuration is resolved once at process start from environment
//! variables and is immutable afterwards. The phone endpoint settings use
//! the same variable names as the original Tasker HTTP bridge.

use crate::error::{Result, TaskerError};
use serde::{Deserialize, Serialize};
use std::{env, time::Duration};

/// Default phone host (Tailscale address of the handset)
pub const DEFAULT_PHONE_HOST: &str = "100.123.253.113";

/// Default Tasker HTTP listener port
pub const DEFAULT_PHONE_PORT: u16 = 1821;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// Default external wake-signal command
pub const DEFAULT_WAKE_COMMAND: &str = "wakeonlan";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Phone endpoint configuration
    pub phone: PhoneConfig,

    /// MCP server identification
    pub mcp: McpConfig,

    /// External command used to emit a wake signal on the local network
    pub wake_command: String,
}

/// Phone endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneConfig {
    /// Hostname or IP of the phone's Tasker HTTP listener
    pub host: String,

    /// Port of the Tasker HTTP listener
    pub port: u16,

    /// Per-request timeout
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

/// MCP server identification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpConfig {
    /// Server name reported during the initialize handshake
    pub name: String,

    /// Server version reported during the initialize handshake
    pub version: String,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_PHONE_HOST.to_string(),
            port: DEFAULT_PHONE_PORT,
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            name: "Tasker Phone Control".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            phone: PhoneConfig::default(),
            mcp: McpConfig::default(),
            wake_command: DEFAULT_WAKE_COMMAND.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables:
    /// - `TASKER_PHONE_HOST` - phone hostname or IP
    /// - `TASKER_PHONE_PORT` - Tasker HTTP listener port
    /// - `TASKER_TIMEOUT` - request timeout in seconds (float)
    /// - `TASKER_WAKE_COMMAND` - wake-signal helper binary
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = env::var("TASKER_PHONE_HOST") {
            config.phone.host = host;
        }

        if let Ok(port) = env::var("TASKER_PHONE_PORT") {
            config.phone.port = port.parse().map_err(|_| {
                TaskerError::config(format!("Invalid TASKER_PHONE_PORT value: {port}"))
            })?;
        }

        if let Ok(timeout) = env::var("TASKER_TIMEOUT") {
            config.phone.timeout = parse_timeout_secs(&timeout)?;
        }

        if let Ok(command) = env::var("TASKER_WAKE_COMMAND") {
            config.wake_command = command;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.phone.host.is_empty() {
            return Err(TaskerError::config("Phone host cannot be empty"));
        }

        if self.phone.port == 0 {
            return Err(TaskerError::config("Phone port cannot be 0"));
        }

        if self.phone.timeout.is_zero() {
            return Err(TaskerError::config("Request timeout cannot be 0"));
        }

        if self.wake_command.is_empty() {
            return Err(TaskerError::config("Wake command cannot be empty"));
        }

        Ok(())
    }
}

/// Parse a timeout given in (possibly fractional) seconds
fn parse_timeout_secs(value: &str) -> Result<Duration> {
    let secs: f64 = value
        .parse()
        .map_err(|_| TaskerError::config(format!("Invalid TASKER_TIMEOUT value: {value}")))?;

    if !secs.is_finite() || secs <= 0.0 {
        return Err(TaskerError::config(format!(
            "TASKER_TIMEOUT must be a positive number of seconds, got: {value}"
        )));
    }

    Ok(Duration::from_secs_f64(secs))
}
