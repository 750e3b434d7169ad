//! Minimal HTTP listener for deployment monitoring.
//!
//! Runs independently of the gateway connection: `/` answers as soon as
//! the process is alive, `/health` reflects the shared [`Health`] record.

use std::net::SocketAddr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::bot::{Health, HealthSnapshot};

/// Build the two-route router. Pure function of the health handle so
/// tests can drive it without binding a socket.
pub fn router(health: Health) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .with_state(health)
}

/// Bind and serve until the process exits.
pub async fn serve(health: Health, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("health server listening on {}", addr);
    axum::serve(listener, router(health)).await?;
    Ok(())
}

async fn root() -> &'static str {
    "🤖 GitHub Discord bot is running"
}

async fn health_check(State(health): State<Health>) -> (StatusCode, Json<HealthSnapshot>) {
    let snapshot = health.snapshot().await;
    let status = if snapshot.connected {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(snapshot))
}
