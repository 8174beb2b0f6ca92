//! Notification and text-to-speech tools

use crate::client::CommandOutcome;
use crate::tools::ToolContext;
use crate::validation::InputValidator;
use tracing::debug;

/// Show a notification on the phone
pub async fn send_notification(
    context: ToolContext,
    title: String,
    text: String,
) -> CommandOutcome {
    let title = match InputValidator::validate_text(&title) {
        Ok(title) => title,
        Err(e) => return CommandOutcome::failed(e.to_string()),
    };
    let text = match InputValidator::validate_text(&text) {
        Ok(text) => text,
        Err(e) => return CommandOutcome::failed(e.to_string()),
    };

    let title = urlencoding::encode(title);
    let text = urlencoding::encode(text);
    debug!("Sending notification");
    context
        .client
        .execute(&format!("/notify/{title}/{text}"))
        .await
}

/// Speak text aloud through the phone's speaker
pub async fn say(context: ToolContext, text: String) -> CommandOutcome {
    let text = match InputValidator::validate_text(&text) {
        Ok(text) => text,
        Err(e) => return CommandOutcome::failed(e.to_string()),
    };

    let encoded = urlencoding::encode(text);
    debug!("Speaking {} characters", text.len());
    context.client.execute(&format!("/say/{encoded}")).await
}
