//! MCP server over stdio
//!
//! Speaks JSON-RPC 2.0 on stdin/stdout, one message per line. Each
//! `tools/call` is spawned as its own task so a slow phone exchange never
//! blocks the read loop; responses are funneled through a single writer so
//! concurrent completions cannot interleave frames.

pub mod catalog;
pub mod handlers;

use crate::client::{create_client, PhoneClient};
use crate::config::ServerConfig;
use crate::error::{Result, TaskerError};
use crate::tools::ToolContext;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, info, warn};

/// MCP protocol revision implemented by this server
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP server for Tasker phone control
#[derive(Clone)]
pub struct TaskerMcpServer {
    /// Server configuration
    config: Arc<ServerConfig>,

    /// Phone client shared by all tool invocations
    client: Arc<dyn PhoneClient>,
}

impl TaskerMcpServer {
    /// Create a new MCP server instance
    pub fn new(config: ServerConfig) -> Result<Self> {
        config.validate()?;
        let client = create_client(&config.phone)?;

        info!(
            "Phone endpoint: {}:{} (timeout {:?})",
            config.phone.host, config.phone.port, config.phone.timeout
        );

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    /// Create a server instance with an externally supplied client
    pub fn with_client(config: ServerConfig, client: Arc<dyn PhoneClient>) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    fn tool_context(&self) -> ToolContext {
        ToolContext::new(self.client.clone(), self.config.clone())
    }

    /// Run the server on stdio until stdin closes
    pub async fn run_stdio(&self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();

        // Single writer task: stdout frames must never interleave.
        let writer = tokio::spawn(async move {
            let mut stdout = tokio::io::stdout();
            while let Some(frame) = rx.recv().await {
                if stdout.write_all(frame.as_bytes()).await.is_err()
                    || stdout.write_all(b"\n").await.is_err()
                    || stdout.flush().await.is_err()
                {
                    break;
                }
            }
        });

        info!("MCP server listening on stdio");

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let message: Value = match serde_json::from_str(line) {
                Ok(message) => message,
                Err(e) => {
                    warn!("Discarding malformed frame: {e}");
                    continue;
                }
            };

            self.dispatch(message, &tx);
        }

        drop(tx);
        let _ = writer.await;
        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Route one JSON-RPC message
    ///
    /// `tools/call` is spawned and answers through the writer channel once
    /// the underlying exchange completes; everything else is answered
    /// inline.
    fn dispatch(&self, message: Value, tx: &UnboundedSender<String>) {
        let method = message["method"].as_str().unwrap_or("").to_string();
        let id = message["id"].clone();
        debug!("Received {method}");

        match method.as_str() {
            "initialize" => {
                send_result(
                    tx,
                    &id,
                    json!({
                        "protocolVersion": MCP_PROTOCOL_VERSION,
                        "capabilities": { "tools": {} },
                        "serverInfo": {
                            "name": self.config.mcp.name,
                            "version": self.config.mcp.version,
                        }
                    }),
                );
            }

            "notifications/initialized" => {}

            "tools/list" => {
                send_result(tx, &id, json!({ "tools": catalog::tool_definitions() }));
            }

            "tools/call" => {
                let context = self.tool_context();
                let tx = tx.clone();
                let params = message["params"].clone();

                tokio::spawn(async move {
                    let name = params["name"].as_str().unwrap_or("").to_string();
                    let args = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

                    match handlers::handle_tool_call(context, &name, &args).await {
                        Ok(result) => {
                            let text = serde_json::to_string_pretty(&result)
                                .unwrap_or_else(|_| "{}".to_string());
                            send_result(
                                &tx,
                                &id,
                                json!({ "content": [{ "type": "text", "text": text }] }),
                            );
                        }
                        Err(e) => send_error(&tx, &id, error_code(&e), &e.to_string()),
                    }
                });
            }

            "ping" => send_result(tx, &id, json!({})),

            _ => {
                if !id.is_null() {
                    send_error(tx, &id, -32601, &format!("Unknown method: {method}"));
                }
            }
        }
    }
}

fn send_result(tx: &UnboundedSender<String>, id: &Value, result: Value) {
    let frame = json!({ "jsonrpc": "2.0", "id": id, "result": result });
    let _ = tx.send(frame.to_string());
}

fn send_error(tx: &UnboundedSender<String>, id: &Value, code: i64, message: &str) {
    let frame = json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message },
    });
    let _ = tx.send(frame.to_string());
}

fn error_code(error: &TaskerError) -> i64 {
    match error {
        TaskerError::InvalidInput(_) => -32602,
        _ => -32603,
    }
}
