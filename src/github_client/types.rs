use serde::{Deserialize, Serialize};

/// GitHub user profile as returned by `GET /users/{username}`.
///
/// Only the fields the bot renders are kept; optional profile fields
/// default to `None` so sparse profiles still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub created_at: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
}

/// Repository details as returned by `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubRepo {
    pub full_name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub license: Option<GithubLicense>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub owner: Option<GithubRepoOwner>,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Response envelope of `GET /search/repositories`. The items carry the
/// same repository shape as `GET /repos/{owner}/{repo}`, so they reuse
/// [`GithubRepo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubSearchResults {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<GithubRepo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubLicense {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubRepoOwner {
    pub login: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone)]
pub struct GithubClientConfig {
    /// Base URL of the GitHub REST API, without a trailing slash.
    pub api_base: String,
    /// Per-request timeout for outbound calls.
    pub request_timeout_secs: u64,
    /// Minimum spacing between consecutive API calls.
    pub min_interval_ms: u64,
}

impl Default for GithubClientConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            // A wedged upstream must not eat the whole deferred-reply budget.
            request_timeout_secs: 5,
            min_interval_ms: 1000,
        }
    }
}

/// Errors surfaced by [`GithubClient`](super::GithubClient) operations.
///
/// `NotFound` and `RateLimited` are expected outcomes that command
/// handlers turn into user-visible replies; the rest are transport or
/// upstream failures reported generically.
#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    #[error("GitHub API rate limit exceeded")]
    RateLimited,
    #[error("resource not found on GitHub")]
    NotFound,
    #[error("GitHub API returned status {0}")]
    UnexpectedStatus(reqwest::StatusCode),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to decode GitHub response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid GitHub token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
}
