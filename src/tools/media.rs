//! Media transport and volume control tools

use crate::client::CommandOutcome;
use crate::tools::ToolContext;
use tracing::debug;

/// Maximum level of the phone's media audio stream
pub const MAX_VOLUME: i64 = 15;

/// Toggle media playback
pub async fn media_play_pause(context: ToolContext) -> CommandOutcome {
    context.client.execute("/media/playpause").await
}

/// Skip to the next media track
pub async fn media_next(context: ToolContext) -> CommandOutcome {
    context.client.execute("/media/next").await
}

/// Go back to the previous media track
pub async fn media_previous(context: ToolContext) -> CommandOutcome {
    context.client.execute("/media/previous").await
}

/// Step the media volume up by one notch
pub async fn volume_up(context: ToolContext) -> CommandOutcome {
    context.client.execute("/volume/up").await
}

/// Step the media volume down by one notch
pub async fn volume_down(context: ToolContext) -> CommandOutcome {
    context.client.execute("/volume/down").await
}

/// Set the media volume to an absolute level, clamped to 0..=15
pub async fn set_volume(context: ToolContext, level: i64) -> CommandOutcome {
    let level = level.clamp(0, MAX_VOLUME);
    debug!("Setting volume to {level}");
    context.client.execute(&format!("/volume/set/{level}")).await
}
