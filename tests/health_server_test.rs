//! Route-level tests for the health server, driven through the router
//! without binding a socket.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use discord_github_bot::bot::Health;
use discord_github_bot::health_server::router;

async fn get(health: &Health, path: &str) -> (StatusCode, String) {
    let response = router(health.clone())
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn root_is_alive_regardless_of_gateway_state() {
    let health = Health::new();

    let (status, body) = get(&health, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("running"));

    // Still alive while "connected".
    health.set_connected(true).await;
    let (status, _) = get(&health, "/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_reports_degraded_before_the_gateway_connects() {
    let health = Health::new();

    let (status, body) = get(&health, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let payload: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(payload["connected"], false);
    assert_eq!(payload["guild_count"], 0);
    assert!(payload["latency_ms"].is_null());
    assert!(payload["uptime_s"].is_u64());
}

#[tokio::test]
async fn health_reflects_the_connected_gateway() {
    let health = Health::new();
    health.set_connected(true).await;
    health.set_guild_count(3).await;
    health.record_latency(Duration::from_millis(42)).await;

    let (status, body) = get(&health, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let payload: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(payload["connected"], true);
    assert_eq!(payload["guild_count"], 3);
    assert_eq!(payload["latency_ms"], 42);
}

#[tokio::test]
async fn health_degrades_again_after_a_disconnect() {
    let health = Health::new();
    health.set_connected(true).await;
    health.set_connected(false).await;

    let (status, body) = get(&health, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let payload: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(payload["connected"], false);
}
