//! Input normalization and display helpers for GitHub data.
//!
//! Users paste profile/repository URLs as often as bare names, so every
//! command argument goes through an extractor before hitting the API.

use url::Url;

/// Extract a GitHub username from raw input.
///
/// Accepts a bare login (`octocat`) or a profile URL
/// (`https://github.com/octocat`, possibly with extra path segments).
pub fn extract_username(input: &str) -> String {
    let input = input.trim();
    if input.starts_with("http") {
        if let Ok(url) = Url::parse(input) {
            if let Some(segment) = url
                .path_segments()
                .and_then(|mut segments| segments.find(|s| !s.is_empty()))
            {
                return segment.to_string();
            }
        }
    }
    input.to_string()
}

/// Extract an `(owner, repo)` pair from raw input.
///
/// Accepts `owner/repo` or a repository URL. Returns `None` when no
/// owner/name pair can be recognized.
pub fn extract_repo(input: &str) -> Option<(String, String)> {
    let input = input.trim();
    let path = if input.starts_with("http") {
        let url = Url::parse(input).ok()?;
        url.path().trim_matches('/').to_string()
    } else {
        input.trim_matches('/').to_string()
    };

    let mut parts = path.split('/').filter(|s| !s.is_empty());
    let owner = parts.next()?.to_string();
    let name = parts.next()?.to_string();
    Some((owner, name))
}

/// Render an ISO-8601 timestamp as `YYYY-MM-DD`, or `N/A` when absent
/// or unparseable.
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(|raw| chrono::DateTime::parse_from_rfc3339(raw).ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Shorten large counts the way GitHub's own UI does: `1.5K`, `2.3M`.
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("octocat", "octocat")]
    #[case("  octocat  ", "octocat")]
    #[case("https://github.com/octocat", "octocat")]
    #[case("https://github.com/octocat/", "octocat")]
    #[case("https://github.com/octocat?tab=repositories", "octocat")]
    #[case("https://github.com/torvalds/linux", "torvalds")]
    fn extracts_username(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(extract_username(input), expected);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(extract_username("   "), "");
    }

    #[rstest]
    #[case("torvalds/linux", "torvalds", "linux")]
    #[case("https://github.com/torvalds/linux", "torvalds", "linux")]
    #[case("https://github.com/torvalds/linux/tree/master", "torvalds", "linux")]
    #[case("/torvalds/linux/", "torvalds", "linux")]
    fn extracts_repo(#[case] input: &str, #[case] owner: &str, #[case] name: &str) {
        assert_eq!(
            extract_repo(input),
            Some((owner.to_string(), name.to_string()))
        );
    }

    #[rstest]
    #[case("linux")]
    #[case("https://github.com/torvalds")]
    #[case("")]
    fn rejects_input_without_owner_and_name(#[case] input: &str) {
        assert_eq!(extract_repo(input), None);
    }

    #[test]
    fn formats_dates() {
        assert_eq!(format_date(Some("2011-01-25T18:44:36Z")), "2011-01-25");
        assert_eq!(format_date(Some("not-a-date")), "N/A");
        assert_eq!(format_date(None), "N/A");
    }

    #[rstest]
    #[case(8, "8")]
    #[case(999, "999")]
    #[case(1_500, "1.5K")]
    #[case(2_300_000, "2.3M")]
    fn formats_counts(#[case] count: u64, #[case] expected: &str) {
        assert_eq!(format_count(count), expected);
    }
}
