//! Tool call dispatch
//!
//! Maps a tool name plus JSON arguments onto the catalog handlers and
//! normalizes every handler's result into a JSON value for the transport
//! layer. Argument extraction failures and unknown tool names are the only
//! errors that surface here; execution failures are already folded into the
//! result shape by the tools themselves.

use crate::error::{Result, TaskerError};
use crate::tools::{self, ToolContext};
use serde_json::{json, Value};

/// Execute a tool by name
pub async fn handle_tool_call(context: ToolContext, name: &str, args: &Value) -> Result<Value> {
    let result = match name {
        "torch_on" => to_json(tools::torch::torch_on(context).await),
        "torch_off" => to_json(tools::torch::torch_off(context).await),
        "launch_app" => {
            let app_name = required_str(args, "app_name")?;
            to_json(tools::apps::launch_app(context, app_name).await)
        }
        "launch_package" => {
            let package = required_str(args, "package")?;
            to_json(tools::apps::launch_package(context, package).await)
        }
        "media_play_pause" => to_json(tools::media::media_play_pause(context).await),
        "media_next" => to_json(tools::media::media_next(context).await),
        "media_previous" => to_json(tools::media::media_previous(context).await),
        "volume_up" => to_json(tools::media::volume_up(context).await),
        "volume_down" => to_json(tools::media::volume_down(context).await),
        "set_volume" => {
            let level = required_int(args, "level")?;
            to_json(tools::media::set_volume(context, level).await)
        }
        "set_brightness" => {
            let level = required_int(args, "level")?;
            to_json(tools::device::set_brightness(context, level).await)
        }
        "vibrate" => {
            let duration_ms = required_int(args, "duration_ms")?;
            to_json(tools::device::vibrate(context, duration_ms).await)
        }
        "send_notification" => {
            let title = required_str(args, "title")?;
            let text = required_str(args, "text")?;
            to_json(tools::messaging::send_notification(context, title, text).await)
        }
        "say" => {
            let text = required_str(args, "text")?;
            to_json(tools::messaging::say(context, text).await)
        }
        "battery_status" => to_json(tools::system::battery_status(context).await),
        "take_photo" => to_json(tools::system::take_photo(context).await),
        "ping_phone" => to_json(tools::system::ping_phone(context).await),
        "wake_phone" => {
            let mac = required_str(args, "mac")?;
            to_json(tools::wake::wake_phone(context, mac).await)
        }
        "get_weather" => {
            let location = required_str(args, "location")?;
            match tools::weather::get_weather(context, location).await {
                Ok(report) => to_json(report),
                Err(e) => json!({ "success": false, "error": e.to_string() }),
            }
        }
        _ => return Err(TaskerError::invalid_input(format!("Unknown tool: {name}"))),
    };

    Ok(result)
}

fn to_json<T: serde::Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Extract a required string argument
fn required_str(args: &Value, key: &str) -> Result<String> {
    args.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| TaskerError::invalid_input(format!("Missing required argument: {key}")))
}

/// Extract a required integer argument
fn required_int(args: &Value, key: &str) -> Result<i64> {
    args.get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| TaskerError::invalid_input(format!("Missing required argument: {key}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::mock::RecordingClient;
    use std::sync::Arc;

    fn test_context(client: Arc<RecordingClient>) -> ToolContext {
        ToolContext::new(client, Arc::new(ServerConfig::default()))
    }

    #[test]
    fn required_str_rejects_missing_and_nonstring_values() {
        let args = json!({"app_name": 42});
        assert!(required_str(&args, "app_name").is_err());
        assert!(required_str(&args, "missing").is_err());
        assert_eq!(
            required_str(&json!({"app_name": "Spotify"}), "app_name").unwrap(),
            "Spotify"
        );
    }

    #[test]
    fn required_int_rejects_missing_and_fractional_values() {
        assert!(required_int(&json!({"level": "loud"}), "level").is_err());
        assert!(required_int(&json!({"level": 7.5}), "level").is_err());
        assert_eq!(required_int(&json!({"level": -5}), "level").unwrap(), -5);
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error() {
        let client = Arc::new(RecordingClient::ok());
        let result = handle_tool_call(test_context(client), "reboot_phone", &json!({})).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn tool_result_carries_the_command_outcome() {
        let client = Arc::new(RecordingClient::ok());
        let result = handle_tool_call(test_context(client.clone()), "torch_on", &json!({}))
            .await
            .unwrap();

        assert_eq!(result["success"], true);
        assert_eq!(result["status_code"], 200);
        assert_eq!(client.paths(), vec!["/torch/on"]);
    }

    #[tokio::test]
    async fn missing_argument_never_reaches_the_client() {
        let client = Arc::new(RecordingClient::ok());
        let result = handle_tool_call(test_context(client.clone()), "set_volume", &json!({})).await;
        assert!(result.is_err());
        assert!(client.paths().is_empty());
    }
}
