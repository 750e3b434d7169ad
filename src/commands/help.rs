use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

pub const NAME: &str = "help";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Show help and usage instructions for the bot")
}

/// Usage table rendered into the help embed, one entry per command.
fn usage_lines() -> Vec<(&'static str, &'static str)> {
    vec![
        ("/ping", "Check bot status and gateway latency"),
        (
            "/github_user <username>",
            "Get a GitHub user profile. Example: `/github_user octocat`",
        ),
        (
            "/github_repo <owner/repo>",
            "Get repository details and statistics. Example: `/github_repo torvalds/linux`",
        ),
        (
            "/github_search <query>",
            "Search repositories with filters. Example: `/github_search language:rust stars:>1000`",
        ),
        (
            "/sync_commands",
            "Re-register slash commands with Discord (administrators only)",
        ),
        ("/help", "Show this message"),
    ]
}

pub async fn run(ctx: &Context, command: &CommandInteraction) -> serenity::Result<()> {
    let mut embed = CreateEmbed::new()
        .title("🤖 GitHub Discord Bot — Commands")
        .description("Profile and repository URLs are accepted wherever a name is expected.")
        .colour(0x5865f2);
    for (usage, description) in usage_lines() {
        embed = embed.field(usage, description, false);
    }

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().embed(embed)),
        )
        .await
}
