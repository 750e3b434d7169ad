use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateEmbedFooter, CreateInteractionResponseFollowup,
};

use crate::bot::BotState;
use crate::github_client::{format_count, GithubError, GithubSearchResults};

pub const NAME: &str = "github_search";

/// Search result descriptions are clipped to keep the embed readable.
const MAX_DESCRIPTION_CHARS: usize = 200;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Search for GitHub repositories by criteria")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "query",
                "Search query, e.g. language:rust stars:>1000",
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

    let query = super::str_option(command, "query").unwrap_or_default().trim();
    if query.is_empty() {
        let reply =
            CreateInteractionResponseFollowup::new().content("❌ Please provide a search query.");
        command.create_followup(&ctx.http, reply).await?;
        return Ok(());
    }

    let reply = match state.github.search_repos(query).await {
        Ok(results) if results.items.is_empty() => CreateInteractionResponseFollowup::new()
            .content(format!("❌ No repositories found for query: **{query}**")),
        Ok(results) => {
            if results.incomplete_results {
                log::warn!("GitHub search returned incomplete results for '{}'", query);
            }
            CreateInteractionResponseFollowup::new().embed(search_embed(query, &results))
        }
        Err(GithubError::RateLimited) => CreateInteractionResponseFollowup::new().content(
            "❌ GitHub API rate limit exceeded. Please try again later, or configure a \
             `GITHUB_TOKEN` to raise the limit.",
        ),
        Err(e) => {
            log::error!("github_search for '{}' failed: {}", query, e);
            CreateInteractionResponseFollowup::new()
                .content(format!("❌ Failed to search repositories for **{query}**"))
        }
    };

    command.create_followup(&ctx.http, reply).await?;
    Ok(())
}

/// Top-results embed, one field per repository.
pub fn search_embed(query: &str, results: &GithubSearchResults) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("🔍 GitHub Repository Search Results")
        .description(format!(
            "Query: `{query}`\nShowing top {} results:",
            results.items.len()
        ))
        .colour(0x238636)
        .footer(CreateEmbedFooter::new(format!(
            "Total results: {} | Powered by GitHub API",
            results.total_count
        )));

    for (index, repo) in results.items.iter().enumerate() {
        let stars = format_count(repo.stargazers_count);
        let language = repo.language.as_deref().unwrap_or("N/A");
        let description = clip_description(repo.description.as_deref());
        embed = embed.field(
            format!("{}. {}", index + 1, repo.full_name),
            format!(
                "⭐ {stars} | 🗣️ {language}\n{description}\n🔗 [View Repo]({})",
                repo.html_url
            ),
            false,
        );
    }

    embed
}

fn clip_description(description: Option<&str>) -> String {
    let description = description.unwrap_or("No description available.");
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        let clipped: String = description.chars().take(MAX_DESCRIPTION_CHARS).collect();
        format!("{clipped}...")
    } else {
        description.to_string()
    }
}
