//! HTTP client implementation for Tasker communication
//!
//! This is the whole request path: resolve the command URL, issue one GET
//! with a bounded timeout, and classify whatever comes back into a
//! [`CommandOutcome`]. No retries, no caching.

use crate::client::{CommandOutcome, PhoneClient};
use crate::config::PhoneConfig;
use crate::error::{Result, TaskerError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use tracing::debug;

/// HTTP client for the phone's Tasker endpoint
pub struct TaskerHttpClient {
    /// HTTP client instance, built once with the configured timeout
    client: Client,

    /// Phone endpoint configuration
    config: PhoneConfig,
}

impl TaskerHttpClient {
    /// Create a new HTTP client
    pub fn new(config: PhoneConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(format!("tasker-mcp/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TaskerError::connection(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Resolve a command path to a fully-qualified URL
    ///
    /// Pure string interpolation over the immutable endpoint configuration.
    /// Any caller-derived segments must already be percent-encoded.
    pub fn command_url(&self, path: &str) -> String {
        format!(
            "http://{}:{}{}",
            self.config.host, self.config.port, path
        )
    }
}

#[async_trait]
impl PhoneClient for TaskerHttpClient {
    async fn execute(&self, path: &str) -> CommandOutcome {
        let url = self.command_url(path);
        debug!("GET {url}");

        match self.client.get(&url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                // Pass the body through unmodified, even on non-200.
                let body = response.text().await.unwrap_or_default();
                debug!("{path} -> {status}");
                CommandOutcome::completed(status, body)
            }
            Err(e) if e.is_timeout() => {
                debug!("{path} -> timeout after {:?}", self.config.timeout);
                CommandOutcome::timed_out()
            }
            Err(e) if e.is_connect() => {
                debug!("{path} -> connect failure: {e}");
                CommandOutcome::unreachable(&self.config.host, self.config.port)
            }
            Err(e) => {
                debug!("{path} -> transport fault: {e}");
                CommandOutcome::failed(e.to_string())
            }
        }
    }

    fn config(&self) -> &PhoneConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_client(host: &str, port: u16) -> TaskerHttpClient {
        TaskerHttpClient::new(PhoneConfig {
            host: host.to_string(),
            port,
            timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    #[test]
    fn command_url_joins_host_port_and_path() {
        let client = test_client("192.168.1.50", 1821);
        assert_eq!(
            client.command_url("/torch/on"),
            "http://192.168.1.50:1821/torch/on"
        );
    }

    #[test]
    fn command_url_preserves_encoded_segments() {
        let client = test_client("phone.local", 8080);
        assert_eq!(
            client.command_url("/app/launch/Google%20Maps"),
            "http://phone.local:8080/app/launch/Google%20Maps"
        );
    }
}
