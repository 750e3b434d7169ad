use serenity::all::{
    Command, CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, Permissions,
};

use crate::bot::BotState;

pub const NAME: &str = "sync_commands";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Re-register slash commands with Discord (Admin only)")
        .default_member_permissions(Permissions::ADMINISTRATOR)
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &BotState,
) -> serenity::Result<()> {
    // Discord already hides the command behind the default permission,
    // but guild overrides can widen it; check the invoker's resolved
    // permission set before touching the platform.
    let permissions = command.member.as_ref().and_then(|member| member.permissions);
    if !is_administrator(permissions) {
        let reply = CreateInteractionResponseMessage::new()
            .content("❌ Administrator permission is required to sync commands.")
            .ephemeral(true);
        return command
            .create_response(&ctx.http, CreateInteractionResponse::Message(reply))
            .await;
    }

    command.defer_ephemeral(&ctx.http).await?;

    let target = state.guild_id.or(command.guild_id);
    let result = match target {
        Some(guild_id) => guild_id.set_commands(&ctx.http, super::definitions()).await,
        None => Command::set_global_commands(&ctx.http, super::definitions()).await,
    };

    let reply = match result {
        Ok(synced) => {
            log::info!("re-registered {} slash commands", synced.len());
            CreateInteractionResponseFollowup::new()
                .content(format!("✅ Successfully synced {} commands", synced.len()))
        }
        Err(e) => {
            log::error!("failed to sync commands: {}", e);
            CreateInteractionResponseFollowup::new()
                .content(format!("❌ Failed to sync commands: {e}"))
        }
    };

    command.create_followup(&ctx.http, reply).await?;
    Ok(())
}

/// Gate on the invoker's resolved permission set. A missing member
/// (e.g. a DM invocation) never passes.
fn is_administrator(permissions: Option<Permissions>) -> bool {
    permissions.is_some_and(|permissions| permissions.administrator())
}
