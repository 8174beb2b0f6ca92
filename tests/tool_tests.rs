//! Action catalog tests
//!
//! Every tool is a thin call site over the phone client; these tests pin
//! down the exact path each one produces, including clamping and
//! percent-encoding of caller-supplied values.

use std::sync::Arc;
use tasker_mcp::mock::RecordingClient;
use tasker_mcp::tools::{self, ToolContext};
use tasker_mcp::ServerConfig;

fn context() -> (Arc<RecordingClient>, ToolContext) {
    let client = Arc::new(RecordingClient::ok());
    let context = ToolContext::new(client.clone(), Arc::new(ServerConfig::default()));
    (client, context)
}

#[tokio::test]
async fn torch_paths() {
    let (client, ctx) = context();
    tools::torch::torch_on(ctx.clone()).await;
    tools::torch::torch_off(ctx).await;
    assert_eq!(client.paths(), vec!["/torch/on", "/torch/off"]);
}

#[tokio::test]
async fn media_transport_paths() {
    let (client, ctx) = context();
    tools::media::media_play_pause(ctx.clone()).await;
    tools::media::media_next(ctx.clone()).await;
    tools::media::media_previous(ctx.clone()).await;
    tools::media::volume_up(ctx.clone()).await;
    tools::media::volume_down(ctx).await;
    assert_eq!(
        client.paths(),
        vec![
            "/media/playpause",
            "/media/next",
            "/media/previous",
            "/volume/up",
            "/volume/down"
        ]
    );
}

#[tokio::test]
async fn volume_is_clamped_to_stream_maximum() {
    let (client, ctx) = context();
    tools::media::set_volume(ctx.clone(), -5).await;
    tools::media::set_volume(ctx.clone(), 999).await;
    tools::media::set_volume(ctx, 7).await;
    assert_eq!(
        client.paths(),
        vec!["/volume/set/0", "/volume/set/15", "/volume/set/7"]
    );
}

#[tokio::test]
async fn brightness_is_clamped_to_255() {
    let (client, ctx) = context();
    tools::device::set_brightness(ctx.clone(), 999).await;
    tools::device::set_brightness(ctx.clone(), -1).await;
    tools::device::set_brightness(ctx, 128).await;
    assert_eq!(
        client.paths(),
        vec![
            "/brightness/set/255",
            "/brightness/set/0",
            "/brightness/set/128"
        ]
    );
}

#[tokio::test]
async fn vibration_duration_is_clamped_to_bounds() {
    let (client, ctx) = context();
    tools::device::vibrate(ctx.clone(), 50).await;
    tools::device::vibrate(ctx.clone(), 99_999).await;
    tools::device::vibrate(ctx, 1500).await;
    assert_eq!(
        client.paths(),
        vec!["/vibrate/100", "/vibrate/5000", "/vibrate/1500"]
    );
}

#[tokio::test]
async fn app_names_are_percent_encoded() {
    let (client, ctx) = context();
    tools::apps::launch_app(ctx.clone(), "Google Maps".to_string()).await;
    tools::apps::launch_package(ctx, "com.spotify.music".to_string()).await;
    assert_eq!(
        client.paths(),
        vec![
            "/app/launch/Google%20Maps",
            "/app/package/com.spotify.music"
        ]
    );
}

#[tokio::test]
async fn reserved_characters_cannot_add_path_segments() {
    let (client, ctx) = context();
    tools::messaging::say(ctx, "up /?&# down".to_string()).await;

    let paths = client.paths();
    assert_eq!(paths, vec!["/say/up%20%2F%3F%26%23%20down"]);
    // Fixed prefix plus exactly one caller-derived segment.
    assert_eq!(paths[0].split('/').count(), 3);
}

#[tokio::test]
async fn notification_title_and_text_stay_in_their_segments() {
    let (client, ctx) = context();
    tools::messaging::send_notification(ctx, "Build done".to_string(), "a/b 100%".to_string())
        .await;
    assert_eq!(
        client.paths(),
        vec!["/notify/Build%20done/a%2Fb%20100%25"]
    );
}

#[tokio::test]
async fn status_paths() {
    let (client, ctx) = context();
    tools::system::battery_status(ctx.clone()).await;
    tools::system::take_photo(ctx.clone()).await;
    tools::system::ping_phone(ctx).await;
    assert_eq!(client.paths(), vec!["/battery", "/photo", "/ping"]);
}

#[tokio::test]
async fn invalid_input_never_reaches_the_wire() {
    let (client, ctx) = context();

    let outcome = tools::apps::launch_app(ctx.clone(), String::new()).await;
    assert!(!outcome.success);
    assert!(outcome.error.is_some());

    let outcome = tools::messaging::say(ctx.clone(), "x".repeat(600)).await;
    assert!(!outcome.success);

    let report = tools::wake::wake_phone(ctx, "not-a-mac".to_string()).await;
    assert!(!report.success);

    assert!(client.paths().is_empty());
}

#[tokio::test]
async fn canned_failure_outcomes_pass_through_tools() {
    let client = Arc::new(RecordingClient::with_outcome(
        tasker_mcp::CommandOutcome::unreachable("10.0.0.9", 1821),
    ));
    let ctx = ToolContext::new(client.clone(), Arc::new(ServerConfig::default()));

    let outcome = tools::torch::torch_on(ctx).await;
    assert!(!outcome.success);
    assert_eq!(
        outcome.error.as_deref(),
        Some("Cannot connect to phone at 10.0.0.9:1821")
    );
}
