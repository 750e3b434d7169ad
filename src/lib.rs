pub mod bot;
pub mod commands;
pub mod config;
pub mod github_client;
pub mod health_server;

pub use bot::{BotState, Handler, Health, HealthSnapshot};
pub use config::Config;
pub use github_client::{GithubClient, GithubClientConfig, GithubError, GithubRepo, GithubUser};
