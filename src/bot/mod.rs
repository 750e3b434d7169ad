//! Gateway runtime: connection lifecycle and interaction dispatch.

pub mod state;

pub use state::{BotState, Health, HealthSnapshot};

use std::sync::Arc;

use serenity::all::{
    ActivityData, Command, ConnectionStage, Context, EventHandler, GatewayIntents, Interaction,
    OnlineStatus, Ready, ResumedEvent, ShardStageUpdateEvent,
};
use serenity::async_trait;

use crate::commands;

/// Serenity event handler owning the process-wide [`BotState`].
///
/// Reconnect behavior itself belongs to serenity; this handler only
/// mirrors the connection lifecycle into [`Health`] and routes slash
/// command interactions to their handlers.
pub struct Handler {
    state: Arc<BotState>,
}

impl Handler {
    pub fn new(state: Arc<BotState>) -> Self {
        Self { state }
    }

    /// Slash commands need no privileged intents; `GUILDS` keeps the
    /// ready payload's guild list populated.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        log::info!(
            "connected as {} ({} guilds)",
            ready.user.name,
            ready.guilds.len()
        );
        self.state.health.set_connected(true).await;
        self.state.health.set_guild_count(ready.guilds.len()).await;

        let registered = match self.state.guild_id {
            Some(guild_id) => guild_id.set_commands(&ctx.http, commands::definitions()).await,
            None => Command::set_global_commands(&ctx.http, commands::definitions()).await,
        };
        match registered {
            Ok(synced) => log::info!("registered {} slash commands", synced.len()),
            Err(e) => log::error!("failed to register slash commands: {}", e),
        }

        ctx.set_presence(
            Some(ActivityData::watching("GitHub profiles")),
            OnlineStatus::Online,
        );
    }

    async fn resume(&self, _ctx: Context, _event: ResumedEvent) {
        log::info!("gateway session resumed");
        self.state.health.set_connected(true).await;
    }

    async fn shard_stage_update(&self, _ctx: Context, event: ShardStageUpdateEvent) {
        log::debug!("shard {} stage: {:?}", event.shard_id, event.new);
        if event.new == ConnectionStage::Disconnected {
            log::warn!("gateway disconnected, serenity will reconnect");
            self.state.health.set_connected(false).await;
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            commands::dispatch(&ctx, &command, &self.state).await;
        }
    }
}
