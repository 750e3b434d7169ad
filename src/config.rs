use anyhow::Context as _;
use serenity::model::id::GuildId;

const DEFAULT_PORT: u16 = 5000;

/// Process configuration, read once from the environment at startup and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// Optional; without it the GitHub API's unauthenticated rate limit
    /// applies.
    pub github_token: Option<String>,
    /// Guild to register slash commands against; `None` registers them
    /// globally.
    pub guild_id: Option<GuildId>,
    /// Port for the health server.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let discord_token = std::env::var("DISCORD_TOKEN")
            .context("DISCORD_TOKEN not found in environment variables")?;

        let github_token = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        let guild_id = match std::env::var("GUILD_ID") {
            Ok(raw) => {
                let id: u64 = raw
                    .parse()
                    .with_context(|| format!("GUILD_ID must be a numeric guild id, got '{raw}'"))?;
                anyhow::ensure!(id != 0, "GUILD_ID must be non-zero");
                Some(GuildId::new(id))
            }
            Err(_) => None,
        };

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{raw}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            discord_token,
            github_token,
            guild_id,
            port,
        })
    }
}
