pub mod format;
pub mod types;

pub use format::{extract_repo, extract_username, format_count, format_date};
pub use types::{GithubClientConfig, GithubError, GithubRepo, GithubSearchResults, GithubUser};

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Thin client for the GitHub REST API.
///
/// Issues one authenticated GET per operation and classifies the
/// response; there is no retry loop. Consecutive calls are spaced by
/// [`GithubClientConfig::min_interval_ms`] so a burst of commands does
/// not burn through the unauthenticated rate limit.
#[derive(Debug)]
pub struct GithubClient {
    http: reqwest::Client,
    config: GithubClientConfig,
    last_call: Mutex<Option<Instant>>,
}

impl GithubClient {
    /// Create a client, attaching `Authorization: token <...>` to every
    /// request when a token is supplied. Without a token the lower
    /// unauthenticated rate limit applies.
    pub fn new(token: Option<&str>, config: GithubClientConfig) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("discord-github-bot/0.1"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("token {token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config,
            last_call: Mutex::new(None),
        })
    }

    /// Fetch a user profile via `GET /users/{username}`.
    pub async fn user(&self, username: &str) -> Result<GithubUser, GithubError> {
        let url = format!("{}/users/{}", self.config.api_base, username);
        let value = self.get_json(&url).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch repository details via `GET /repos/{owner}/{repo}`.
    pub async fn repo(&self, owner: &str, name: &str) -> Result<GithubRepo, GithubError> {
        let url = format!("{}/repos/{}/{}", self.config.api_base, owner, name);
        let value = self.get_json(&url).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Search repositories via `GET /search/repositories`, most-starred
    /// first, capped at five results.
    pub async fn search_repos(&self, query: &str) -> Result<GithubSearchResults, GithubError> {
        let params = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("q", query)
            .append_pair("sort", "stars")
            .append_pair("order", "desc")
            .append_pair("per_page", "5")
            .finish();
        let url = format!("{}/search/repositories?{}", self.config.api_base, params);
        let value = self.get_json(&url).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn get_json(&self, url: &str) -> Result<serde_json::Value, GithubError> {
        self.pace().await;

        log::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            let reset = response
                .headers()
                .get("x-ratelimit-reset")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown");
            log::warn!("GitHub rate limit hit for {} (resets at {})", url, reset);
        }

        classify_status(status)?;
        Ok(response.json().await?)
    }

    /// Sleep until at least `min_interval_ms` has passed since the
    /// previous call, then claim the current slot.
    async fn pace(&self) {
        let min_interval = Duration::from_millis(self.config.min_interval_ms);
        let mut last_call = self.last_call.lock().await;
        if let Some(previous) = *last_call {
            let elapsed = previous.elapsed();
            if elapsed < min_interval {
                tokio::time::sleep(min_interval - elapsed).await;
            }
        }
        *last_call = Some(Instant::now());
    }
}

/// Map an upstream status to the error taxonomy: 404 is not-found,
/// 403/429 signal the rate limit, any other non-2xx is unexpected.
fn classify_status(status: StatusCode) -> Result<(), GithubError> {
    if status.is_success() {
        return Ok(());
    }
    match status {
        StatusCode::NOT_FOUND => Err(GithubError::NotFound),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Err(GithubError::RateLimited),
        other => Err(GithubError::UnexpectedStatus(other)),
    }
}
