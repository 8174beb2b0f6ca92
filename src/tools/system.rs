//! Phone status and camera tools

use crate::client::CommandOutcome;
use crate::tools::ToolContext;

/// Query the phone's battery status
pub async fn battery_status(context: ToolContext) -> CommandOutcome {
    context.client.execute("/battery").await
}

/// Trigger a photo capture on the phone
pub async fn take_photo(context: ToolContext) -> CommandOutcome {
    context.client.execute("/photo").await
}

/// Check whether the Tasker HTTP listener is alive
pub async fn ping_phone(context: ToolContext) -> CommandOutcome {
    context.client.execute("/ping").await
}
