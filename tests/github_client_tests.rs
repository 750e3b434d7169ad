//! Deserialization tests for GitHub API payloads, using the documented
//! response shapes.

use discord_github_bot::github_client::{GithubRepo, GithubSearchResults, GithubUser};

const OCTOCAT: &str = r#"{
    "login": "octocat",
    "id": 583231,
    "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
    "html_url": "https://github.com/octocat",
    "name": "The Octocat",
    "company": "@github",
    "blog": "https://github.blog",
    "location": "San Francisco",
    "bio": null,
    "twitter_username": null,
    "public_repos": 8,
    "followers": 12345,
    "following": 9,
    "created_at": "2011-01-25T18:44:36Z"
}"#;

#[test]
fn user_payload_deserializes() {
    let user: GithubUser = serde_json::from_str(OCTOCAT).unwrap();

    assert_eq!(user.login, "octocat");
    assert_eq!(user.name.as_deref(), Some("The Octocat"));
    assert_eq!(user.public_repos, 8);
    assert_eq!(user.followers, 12345);
    assert_eq!(user.bio, None);
    assert_eq!(user.created_at.as_deref(), Some("2011-01-25T18:44:36Z"));
}

#[test]
fn sparse_user_payload_still_deserializes() {
    let user: GithubUser = serde_json::from_str(
        r#"{
            "login": "ghost",
            "avatar_url": "https://avatars.githubusercontent.com/u/10137?v=4",
            "html_url": "https://github.com/ghost"
        }"#,
    )
    .unwrap();

    assert_eq!(user.login, "ghost");
    assert_eq!(user.name, None);
    assert_eq!(user.public_repos, 0);
    assert_eq!(user.twitter_username, None);
}

#[test]
fn repo_payload_deserializes() {
    let repo: GithubRepo = serde_json::from_str(
        r#"{
            "full_name": "torvalds/linux",
            "html_url": "https://github.com/torvalds/linux",
            "description": "Linux kernel source tree",
            "stargazers_count": 180000,
            "forks_count": 55000,
            "open_issues_count": 321,
            "language": "C",
            "license": {"name": "GNU General Public License v2.0"},
            "updated_at": "2024-05-01T10:00:00Z",
            "homepage": "",
            "owner": {
                "login": "torvalds",
                "avatar_url": "https://avatars.githubusercontent.com/u/1024025?v=4"
            },
            "topics": ["kernel", "linux"]
        }"#,
    )
    .unwrap();

    assert_eq!(repo.full_name, "torvalds/linux");
    assert_eq!(repo.stargazers_count, 180_000);
    assert_eq!(
        repo.license.unwrap().name.as_deref(),
        Some("GNU General Public License v2.0")
    );
    assert_eq!(repo.owner.unwrap().login, "torvalds");
    assert_eq!(repo.topics, vec!["kernel", "linux"]);
}

#[test]
fn search_payload_deserializes() {
    let results: GithubSearchResults = serde_json::from_str(
        r#"{
            "total_count": 4021,
            "incomplete_results": false,
            "items": [
                {
                    "full_name": "tokio-rs/tokio",
                    "html_url": "https://github.com/tokio-rs/tokio",
                    "description": "A runtime for writing reliable asynchronous applications",
                    "stargazers_count": 26000,
                    "language": "Rust"
                },
                {
                    "full_name": "serde-rs/serde",
                    "html_url": "https://github.com/serde-rs/serde",
                    "stargazers_count": 9000
                }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(results.total_count, 4021);
    assert!(!results.incomplete_results);
    assert_eq!(results.items.len(), 2);
    assert_eq!(results.items[0].full_name, "tokio-rs/tokio");
    assert_eq!(results.items[1].description, None);
}

#[test]
fn empty_search_payload_deserializes() {
    let results: GithubSearchResults =
        serde_json::from_str(r#"{"total_count": 0, "incomplete_results": false, "items": []}"#)
            .unwrap();

    assert!(results.items.is_empty());
}

#[test]
fn repo_payload_without_license_or_owner_deserializes() {
    let repo: GithubRepo = serde_json::from_str(
        r#"{
            "full_name": "someone/scratch",
            "html_url": "https://github.com/someone/scratch"
        }"#,
    )
    .unwrap();

    assert!(repo.license.is_none());
    assert!(repo.owner.is_none());
    assert!(repo.topics.is_empty());
    assert_eq!(repo.open_issues_count, 0);
}
