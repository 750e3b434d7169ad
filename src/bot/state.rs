//! Shared state between the gateway runtime and the health server.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serenity::model::id::GuildId;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::github_client::GithubClient;

/// Process-wide bot state handed to every command handler.
pub struct BotState {
    pub github: GithubClient,
    pub health: Health,
    /// Guild the command set is registered against; `None` means global.
    pub guild_id: Option<GuildId>,
}

/// Point-in-time view of the gateway connection, served by `/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthSnapshot {
    pub connected: bool,
    pub guild_count: usize,
    /// `null` until the first latency sample arrives.
    pub latency_ms: Option<u64>,
    pub uptime_s: u64,
}

#[derive(Debug)]
struct HealthInner {
    connected: bool,
    guild_count: usize,
    latency: Option<Duration>,
    started_at: Instant,
}

/// Cloneable handle to the mutable health record.
///
/// The gateway lifecycle callbacks and the latency sampler write;
/// the health routes only read snapshots. The lock never crosses an
/// `.await` on the write side, so contention stays negligible.
#[derive(Debug, Clone)]
pub struct Health(Arc<RwLock<HealthInner>>);

impl Health {
    pub fn new() -> Self {
        Self(Arc::new(RwLock::new(HealthInner {
            connected: false,
            guild_count: 0,
            latency: None,
            started_at: Instant::now(),
        })))
    }

    pub async fn set_connected(&self, connected: bool) {
        self.0.write().await.connected = connected;
    }

    pub async fn set_guild_count(&self, guild_count: usize) {
        self.0.write().await.guild_count = guild_count;
    }

    pub async fn record_latency(&self, latency: Duration) {
        self.0.write().await.latency = Some(latency);
    }

    pub async fn snapshot(&self) -> HealthSnapshot {
        let inner = self.0.read().await;
        HealthSnapshot {
            connected: inner.connected,
            guild_count: inner.guild_count,
            latency_ms: inner.latency.map(|l| l.as_millis() as u64),
            uptime_s: inner.started_at.elapsed().as_secs(),
        }
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new()
    }
}
