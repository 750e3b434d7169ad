use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponseFollowup,
};

use crate::bot::BotState;
use crate::github_client::{extract_username, format_count, format_date, GithubError, GithubUser};

pub const NAME: &str = "github_user";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Get GitHub user profile information")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "username",
                "GitHub username or profile URL",
            )
            .required(true),
        )
}

/// Every outcome of the upstream call becomes a reply; nothing here
/// propagates past the handler boundary except Discord API failures.
pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &BotState,
) -> serenity::Result<()> {
    // The lookup may take a while; acknowledge before calling out.
    command.defer(&ctx.http).await?;

    let raw = super::str_option(command, "username").unwrap_or_default();
    let username = extract_username(raw);
    if username.is_empty() {
        let reply = CreateInteractionResponseFollowup::new()
            .content("❌ Please provide a GitHub username or profile URL.");
        command.create_followup(&ctx.http, reply).await?;
        return Ok(());
    }

    let reply = match state.github.user(&username).await {
        Ok(user) => CreateInteractionResponseFollowup::new().embed(profile_embed(&user)),
        Err(GithubError::NotFound) => CreateInteractionResponseFollowup::new()
            .content(format!("❌ User **{username}** not found on GitHub")),
        Err(GithubError::RateLimited) => CreateInteractionResponseFollowup::new().content(
            "❌ GitHub API rate limit exceeded. Please try again later, or configure a \
             `GITHUB_TOKEN` to raise the limit.",
        ),
        Err(e) => {
            log::error!("github_user lookup for '{}' failed: {}", username, e);
            CreateInteractionResponseFollowup::new()
                .content(format!("❌ Failed to fetch data for **{username}**"))
        }
    };

    command.create_followup(&ctx.http, reply).await?;
    Ok(())
}

/// Profile card in GitHub's brand green.
pub fn profile_embed(user: &GithubUser) -> CreateEmbed {
    let display_name = user.name.as_deref().unwrap_or(&user.login);
    let mut embed = CreateEmbed::new()
        .title(format!("{display_name}'s GitHub Profile"))
        .url(user.html_url.as_str())
        .description(user.bio.as_deref().unwrap_or("No bio available"))
        .colour(0x238636)
        .thumbnail(user.avatar_url.as_str())
        .field(
            "👤 Username",
            format!("[{}]({})", user.login, user.html_url),
            true,
        )
        .field("📦 Public Repos", format_count(user.public_repos), true)
        .field("👥 Followers", format_count(user.followers), true)
        .field("👤 Following", format_count(user.following), true)
        .field("📍 Location", user.location.as_deref().unwrap_or("N/A"), true)
        .field("🏢 Company", user.company.as_deref().unwrap_or("N/A"), true)
        .field("📅 Joined", format_date(user.created_at.as_deref()), true);

    let mut links = Vec::new();
    if let Some(blog) = user.blog.as_deref().filter(|blog| !blog.is_empty()) {
        links.push(format!("🌐 [Website]({blog})"));
    }
    if let Some(twitter) = &user.twitter_username {
        links.push(format!("🐦 [Twitter](https://twitter.com/{twitter})"));
    }
    if !links.is_empty() {
        embed = embed.field("🔗 Links", links.join(" | "), false);
    }

    embed
}
