//! Phone client implementations for Tasker HTTP communication

pub mod http_client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::PhoneConfig;

pub use http_client::TaskerHttpClient;

/// Outcome of a single phone command
///
/// Every invocation produces exactly one of these, whatever happens on the
/// wire. A completed HTTP exchange populates `status_code` and `response`;
/// any transport failure populates `error` instead. `success` is true only
/// for HTTP 200.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandOutcome {
    /// Whether the phone accepted the command (HTTP 200)
    pub success: bool,

    /// HTTP status code, present only when the exchange completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    /// Response body, present only when the exchange completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    /// Failure description, present only when no exchange completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandOutcome {
    /// Outcome of a completed HTTP exchange
    ///
    /// An empty body is replaced with the literal `"OK"` so callers always
    /// receive some response text alongside the status.
    pub fn completed(status_code: u16, body: String) -> Self {
        let response = if body.is_empty() {
            "OK".to_string()
        } else {
            body
        };

        Self {
            success: status_code == 200,
            status_code: Some(status_code),
            response: Some(response),
            error: None,
        }
    }

    /// Outcome of a request that hit the configured timeout
    pub fn timed_out() -> Self {
        Self::failed("Request timed out")
    }

    /// Outcome of a request that could not reach the phone
    pub fn unreachable(host: &str, port: u16) -> Self {
        Self::failed(format!("Cannot connect to phone at {host}:{port}"))
    }

    /// Outcome of any other transport-level fault
    pub fn failed<S: Into<String>>(error: S) -> Self {
        Self {
            success: false,
            status_code: None,
            response: None,
            error: Some(error.into()),
        }
    }
}

/// Trait for phone client implementations
///
/// Action handlers are thin call sites over this trait: they build a path
/// and delegate here. Implementations must never fail past this boundary -
/// every fault is folded into the returned [`CommandOutcome`].
#[async_trait]
pub trait PhoneClient: Send + Sync {
    /// Execute a single command path against the phone
    async fn execute(&self, path: &str) -> CommandOutcome;

    /// The endpoint configuration this client talks to
    fn config(&self) -> &PhoneConfig;
}

/// Create a phone client for the given configuration
pub fn create_client(config: &PhoneConfig) -> crate::error::Result<Arc<dyn PhoneClient>> {
    let client = TaskerHttpClient::new(config.clone())?;
    Ok(Arc::new(client))
}
