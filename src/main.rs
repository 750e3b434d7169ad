use std::sync::Arc;
use std::time::Duration;

use serenity::Client;

use discord_github_bot::bot::{BotState, Handler, Health};
use discord_github_bot::config::Config;
use discord_github_bot::github_client::{GithubClient, GithubClientConfig};
use discord_github_bot::health_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    log::info!("Starting GitHub Discord bot...");

    let config = Config::from_env()?;
    let health = Health::new();

    // The health server answers deployment probes whether or not the
    // gateway connection is up yet.
    tokio::spawn({
        let health = health.clone();
        let port = config.port;
        async move {
            if let Err(e) = health_server::serve(health, port).await {
                log::error!("health server error: {}", e);
            }
        }
    });

    let github = GithubClient::new(config.github_token.as_deref(), GithubClientConfig::default())?;
    if config.github_token.is_none() {
        log::warn!("GITHUB_TOKEN not set, using the unauthenticated GitHub rate limit");
    }

    let state = Arc::new(BotState {
        github,
        health: health.clone(),
        guild_id: config.guild_id,
    });

    let mut client = Client::builder(&config.discord_token, Handler::intents())
        .event_handler(Handler::new(state))
        .await?;

    spawn_latency_sampler(client.shard_manager.clone(), health);

    // Serenity retries transient gateway drops itself; an error here is
    // fatal (e.g. an invalid or revoked token) and ends the process.
    if let Err(e) = client.start().await {
        log::error!("fatal gateway error: {}", e);
        return Err(e.into());
    }
    Ok(())
}

/// Periodically record gateway latency into the shared health record.
fn spawn_latency_sampler(shard_manager: Arc<serenity::gateway::ShardManager>, health: Health) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(30));
        loop {
            ticker.tick().await;
            // Copy the sample out so the runner map is not held across
            // the health write.
            let latency = {
                let runners = shard_manager.runners.lock().await;
                runners.values().find_map(|runner| runner.latency)
            };
            if let Some(latency) = latency {
                health.record_latency(latency).await;
            }
        }
    });
}
