//! Tool catalog
//!
//! The fixed table of tools the server advertises through `tools/list`.
//! Handlers for these names live in [`super::handlers`].

use serde_json::{json, Value};

/// Schema for a tool that takes no arguments
fn no_args(name: &str, description: &str) -> Value {
    json!({
        "name": name,
        "description": description,
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}

/// Tool definitions advertised to MCP clients
pub fn tool_definitions() -> Vec<Value> {
    vec![
        no_args("torch_on", "Turn on the phone's flashlight/torch."),
        no_args("torch_off", "Turn off the phone's flashlight/torch."),
        json!({
            "name": "launch_app",
            "description": "Launch an app on the phone by its name (e.g. Spotify, Chrome, Camera).",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "app_name": {
                        "type": "string",
                        "description": "The name of the app as it appears on the phone"
                    }
                },
                "required": ["app_name"]
            }
        }),
        json!({
            "name": "launch_package",
            "description": "Launch an app on the phone by its package identifier (e.g. com.spotify.music).",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "package": {
                        "type": "string",
                        "description": "The Android package identifier"
                    }
                },
                "required": ["package"]
            }
        }),
        no_args("media_play_pause", "Toggle media playback on the phone."),
        no_args("media_next", "Skip to the next media track."),
        no_args("media_previous", "Go back to the previous media track."),
        no_args("volume_up", "Step the media volume up by one notch."),
        no_args("volume_down", "Step the media volume down by one notch."),
        json!({
            "name": "set_volume",
            "description": "Set the media volume to an absolute level (0-15).",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "level": {
                        "type": "integer",
                        "description": "Volume level, clamped to 0-15"
                    }
                },
                "required": ["level"]
            }
        }),
        json!({
            "name": "set_brightness",
            "description": "Set the screen brightness to an absolute level (0-255).",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "level": {
                        "type": "integer",
                        "description": "Brightness level, clamped to 0-255"
                    }
                },
                "required": ["level"]
            }
        }),
        json!({
            "name": "vibrate",
            "description": "Vibrate the phone for a duration in milliseconds (100-5000).",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "duration_ms": {
                        "type": "integer",
                        "description": "Vibration duration in milliseconds, clamped to 100-5000"
                    }
                },
                "required": ["duration_ms"]
            }
        }),
        json!({
            "name": "send_notification",
            "description": "Show a notification on the phone.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "Notification title"
                    },
                    "text": {
                        "type": "string",
                        "description": "Notification body text"
                    }
                },
                "required": ["title", "text"]
            }
        }),
        json!({
            "name": "say",
            "description": "Speak text aloud through the phone's speaker.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "Text to speak"
                    }
                },
                "required": ["text"]
            }
        }),
        no_args("battery_status", "Get the phone's battery status."),
        no_args("take_photo", "Take a photo with the phone's camera."),
        no_args("ping_phone", "Check whether the phone's Tasker endpoint is reachable."),
        json!({
            "name": "wake_phone",
            "description": "Send a wake-on-LAN signal to the phone.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "mac": {
                        "type": "string",
                        "description": "MAC address of the phone, e.g. AA:BB:CC:DD:EE:FF"
                    }
                },
                "required": ["mac"]
            }
        }),
        json!({
            "name": "get_weather",
            "description": "Get current weather conditions for a location.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "location": {
                        "type": "string",
                        "description": "City or place name"
                    }
                },
                "required": ["location"]
            }
        }),
    ]
}
