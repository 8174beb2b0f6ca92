//! App launching tools

use crate::client::CommandOutcome;
use crate::tools::ToolContext;
use crate::validation::InputValidator;
use tracing::debug;

/// Launch an app by its display name (e.g. "Spotify", "Google Maps")
pub async fn launch_app(context: ToolContext, app_name: String) -> CommandOutcome {
    let app_name = match InputValidator::validate_app_name(&app_name) {
        Ok(name) => name,
        Err(e) => return CommandOutcome::failed(e.to_string()),
    };

    let encoded = urlencoding::encode(app_name);
    debug!("Launching app '{app_name}'");
    context.client.execute(&format!("/app/launch/{encoded}")).await
}

/// Launch an app by its package identifier (e.g. "com.spotify.music")
pub async fn launch_package(context: ToolContext, package: String) -> CommandOutcome {
    let package = match InputValidator::validate_app_name(&package) {
        Ok(package) => package,
        Err(e) => return CommandOutcome::failed(e.to_string()),
    };

    let encoded = urlencoding::encode(package);
    debug!("Launching package '{package}'");
    context.client.execute(&format!("/app/package/{encoded}")).await
}
