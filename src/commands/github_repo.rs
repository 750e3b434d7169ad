use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponseFollowup,
};

use crate::bot::BotState;
use crate::github_client::{extract_repo, format_count, format_date, GithubError, GithubRepo};

pub const NAME: &str = "github_repo";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Get GitHub repository details")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "repo",
                "owner/repo or repository URL",
            )
            .required(true),
        )
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &BotState,
) -> serenity::Result<()> {
    command.defer(&ctx.http).await?;

    let raw = super::str_option(command, "repo").unwrap_or_default();
    let Some((owner, name)) = extract_repo(raw) else {
        let reply = CreateInteractionResponseFollowup::new().content(
            "❌ Please provide a valid repository in the form `owner/repo` or a GitHub URL.",
        );
        command.create_followup(&ctx.http, reply).await?;
        return Ok(());
    };

    let reply = match state.github.repo(&owner, &name).await {
        Ok(repo) => CreateInteractionResponseFollowup::new().embed(repo_embed(&repo)),
        Err(GithubError::NotFound) => CreateInteractionResponseFollowup::new()
            .content(format!("❌ Repository **{owner}/{name}** not found on GitHub")),
        Err(GithubError::RateLimited) => CreateInteractionResponseFollowup::new().content(
            "❌ GitHub API rate limit exceeded. Please try again later, or configure a \
             `GITHUB_TOKEN` to raise the limit.",
        ),
        Err(e) => {
            log::error!("github_repo lookup for '{}/{}' failed: {}", owner, name, e);
            CreateInteractionResponseFollowup::new()
                .content(format!("❌ Failed to fetch data for **{owner}/{name}**"))
        }
    };

    command.create_followup(&ctx.http, reply).await?;
    Ok(())
}

pub fn repo_embed(repo: &GithubRepo) -> CreateEmbed {
    let license = repo
        .license
        .as_ref()
        .and_then(|license| license.name.as_deref())
        .unwrap_or("N/A");

    let mut embed = CreateEmbed::new()
        .title(repo.full_name.as_str())
        .url(repo.html_url.as_str())
        .description(repo.description.as_deref().unwrap_or("No description provided."))
        .colour(0x0d1117)
        .field("⭐ Stars", format_count(repo.stargazers_count), true)
        .field("🍴 Forks", format_count(repo.forks_count), true)
        .field("🐛 Open Issues", format_count(repo.open_issues_count), true)
        .field("🗣️ Language", repo.language.as_deref().unwrap_or("N/A"), true)
        .field("📄 License", license, true)
        .field("🕒 Updated", format_date(repo.updated_at.as_deref()), true);

    if let Some(owner) = &repo.owner {
        embed = embed.thumbnail(owner.avatar_url.as_str());
    }

    let mut links = Vec::new();
    if let Some(homepage) = repo.homepage.as_deref().filter(|page| !page.is_empty()) {
        links.push(format!("🌐 [Homepage]({homepage})"));
    }
    links.push(format!("📦 [Repo]({})", repo.html_url));
    embed = embed.field("🔗 Links", links.join(" | "), false);

    if !repo.topics.is_empty() {
        let topics: Vec<_> = repo.topics.iter().take(10).cloned().collect();
        embed = embed.field("🏷️ Topics", topics.join(", "), false);
    }

    embed
}
