//! Mock implementations for testing
//!
//! A [`PhoneClient`] that records every command path and returns a canned
//! outcome, so tests can assert on exactly what would have gone over the
//! wire without a phone on the network.

use crate::client::{CommandOutcome, PhoneClient};
use crate::config::PhoneConfig;
use async_trait::async_trait;
use std::sync::Mutex;

/// Recording phone client for tests
pub struct RecordingClient {
    config: PhoneConfig,
    outcome: CommandOutcome,
    paths: Mutex<Vec<String>>,
}

impl RecordingClient {
    /// Client that answers every command with HTTP 200 and an empty body
    pub fn ok() -> Self {
        Self::with_outcome(CommandOutcome::completed(200, String::new()))
    }

    /// Client that answers every command with the given outcome
    pub fn with_outcome(outcome: CommandOutcome) -> Self {
        Self {
            config: PhoneConfig::default(),
            outcome,
            paths: Mutex::new(Vec::new()),
        }
    }

    /// The command paths executed so far, in order
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhoneClient for RecordingClient {
    async fn execute(&self, path: &str) -> CommandOutcome {
        self.paths.lock().unwrap().push(path.to_string());
        self.outcome.clone()
    }

    fn config(&self) -> &PhoneConfig {
        &self.config
    }
}
