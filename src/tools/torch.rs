//! Torch (flashlight) control tools

use crate::client::CommandOutcome;
use crate::tools::ToolContext;

/// Turn on the phone's flashlight
pub async fn torch_on(context: ToolContext) -> CommandOutcome {
    context.client.execute("/torch/on").await
}

/// Turn off the phone's flashlight
pub async fn torch_off(context: ToolContext) -> CommandOutcome {
    context.client.execute("/torch/off").await
}
