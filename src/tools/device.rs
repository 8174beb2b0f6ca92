//! Screen and haptics control tools

use crate::client::CommandOutcome;
use crate::tools::ToolContext;
use tracing::debug;

/// Maximum screen brightness level
pub const MAX_BRIGHTNESS: i64 = 255;

/// Vibration duration bounds in milliseconds
pub const MIN_VIBRATE_MS: i64 = 100;
pub const MAX_VIBRATE_MS: i64 = 5000;

/// Set the screen brightness to an absolute level, clamped to 0..=255
pub async fn set_brightness(context: ToolContext, level: i64) -> CommandOutcome {
    let level = level.clamp(0, MAX_BRIGHTNESS);
    debug!("Setting brightness to {level}");
    context
        .client
        .execute(&format!("/brightness/set/{level}"))
        .await
}

/// Vibrate the phone for a duration, clamped to 100..=5000 ms
pub async fn vibrate(context: ToolContext, duration_ms: i64) -> CommandOutcome {
    let duration_ms = duration_ms.clamp(MIN_VIBRATE_MS, MAX_VIBRATE_MS);
    debug!("Vibrating for {duration_ms} ms");
    context.client.execute(&format!("/vibrate/{duration_ms}")).await
}
