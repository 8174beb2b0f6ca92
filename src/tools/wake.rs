//! Local-network wake-signal tool
//!
//! The phone cannot be reached over HTTP while it sleeps with Wi-Fi power
//! saving, so waking it goes through an external helper command on the
//! local network rather than the Tasker endpoint.

use crate::tools::ToolContext;
use crate::validation::InputValidator;
use serde::Serialize;
use tokio::process::Command;
use tracing::debug;

/// Result of a wake-signal invocation
#[derive(Debug, Clone, Serialize)]
pub struct WakeReport {
    /// Whether the helper command exited successfully
    pub success: bool,

    /// The helper command that was invoked
    pub command: String,

    /// Helper output on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Send a wake signal to the phone's MAC address
pub async fn wake_phone(context: ToolContext, mac: String) -> WakeReport {
    let command = context.config.wake_command.clone();

    let mac = match InputValidator::validate_mac(&mac) {
        Ok(mac) => mac,
        Err(e) => {
            return WakeReport {
                success: false,
                command,
                output: None,
                error: Some(e.to_string()),
            }
        }
    };

    debug!("Sending wake signal to {mac} via '{command}'");
    send_wake_signal(&command, mac).await
}

/// Run the wake helper and reshape its exit status and output
async fn send_wake_signal(program: &str, mac: &str) -> WakeReport {
    match Command::new(program).arg(mac).output().await {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            WakeReport {
                success: true,
                command: program.to_string(),
                output: Some(if stdout.is_empty() {
                    "OK".to_string()
                } else {
                    stdout
                }),
                error: None,
            }
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            WakeReport {
                success: false,
                command: program.to_string(),
                output: None,
                error: Some(if stderr.is_empty() {
                    format!("{program} exited with {}", output.status)
                } else {
                    stderr
                }),
            }
        }
        Err(e) => WakeReport {
            success: false,
            command: program.to_string(),
            output: None,
            error: Some(format!("Failed to run {program}: {e}")),
        },
    }
}
