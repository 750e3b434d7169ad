use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::bot::BotState;

pub const NAME: &str = "ping";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Test if the bot is working")
}

/// No external calls here, so the reply goes out immediately without a
/// deferred acknowledgment.
pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &BotState,
) -> serenity::Result<()> {
    let snapshot = state.health.snapshot().await;
    let latency = snapshot
        .latency_ms
        .map(|ms| format!("{ms}ms"))
        .unwrap_or_else(|| "sampling…".to_string());

    let embed = CreateEmbed::new()
        .title("🏓 Pong!")
        .description("Bot is online and responding")
        .colour(0x00ff00)
        .field("Latency", latency, true)
        .field("Guilds", snapshot.guild_count.to_string(), true)
        .field("Status", "✅ Healthy", true);

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().embed(embed)),
        )
        .await
}
