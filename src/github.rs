// src/github.rs

use crate::error::{FetchError, Result};
use crate::types::{commit_author::CommitAuthor, commit_record::CommitRecord};
use log::debug;
use serde::Deserialize;

const GITHUB_API: &str = "https://api.github.com";

// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("contrib_tui/", env!("CARGO_PKG_VERSION"));

// Wire shape of one entry in the commit-listing response. Everything is
// optional here so that incomplete entries surface as a parse error
// instead of a deserialization failure with a different message.
#[derive(Debug, Deserialize)]
struct RawCommit {
    sha: Option<String>,
    commit: Option<RawCommitDetail>,
}

#[derive(Debug, Deserialize)]
struct RawCommitDetail {
    author: Option<RawAuthor>,
}

#[derive(Debug, Deserialize)]
struct RawAuthor {
    name: Option<String>,
    email: Option<String>,
}

/// Fetches the most recent commits of `owner/repo` (the upstream default
/// page, newest first) and normalizes them into `CommitRecord`s.
pub async fn fetch_commits(owner: &str, repo: &str) -> Result<Vec<CommitRecord>> {
    fetch_commits_from(GITHUB_API, owner, repo).await
}

async fn fetch_commits_from(base_url: &str, owner: &str, repo: &str) -> Result<Vec<CommitRecord>> {
    if owner.is_empty() || repo.is_empty() {
        return Err(FetchError::Input("Missing owner and/or repo.".to_string()));
    }

    let url = format!(
        "{}/repos/{}/{}/commits",
        base_url.trim_end_matches('/'),
        owner,
        repo
    );

    let res = reqwest::Client::new()
        .get(&url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(|e| FetchError::Upstream(format!("Request to GitHub failed: {e}")))?;

    debug!("GET {} -> {}", url, res.status());

    if !res.status().is_success() {
        return Err(FetchError::Upstream(
            "The specified github repo either does not exist, or is not public.".to_string(),
        ));
    }

    let body = res
        .text()
        .await
        .map_err(|e| FetchError::Upstream(format!("Failed to read GitHub response: {e}")))?;

    parse_commits(&body)
}

/// Normalizes a commit-listing response body. All-or-nothing: one entry
/// missing its sha, author name, or author email fails the whole batch.
pub fn parse_commits(body: &str) -> Result<Vec<CommitRecord>> {
    let raw: Vec<RawCommit> = serde_json::from_str(body)
        .map_err(|e| FetchError::Parse(format!("Invalid response from GitHub API: {e}")))?;

    raw.into_iter().map(normalize_commit).collect()
}

fn normalize_commit(raw: RawCommit) -> Result<CommitRecord> {
    let invalid = || FetchError::Parse("Invalid response from GitHub API.".to_string());

    let id = raw.sha.filter(|s| !s.is_empty()).ok_or_else(invalid)?;
    let author = raw
        .commit
        .and_then(|c| c.author)
        .ok_or_else(invalid)?;
    let name = author.name.filter(|s| !s.is_empty()).ok_or_else(invalid)?;
    let email = author.email.filter(|s| !s.is_empty()).ok_or_else(invalid)?;

    Ok(CommitRecord {
        id,
        author: CommitAuthor { name, email },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_payload() {
        let body = r#"[{"sha":"abc123","commit":{"author":{"name":"Jane Doe","email":"jane@x.com"}}}]"#;
        let records = parse_commits(body).unwrap();
        assert_eq!(
            records,
            vec![CommitRecord {
                id: "abc123".to_string(),
                author: CommitAuthor {
                    name: "Jane Doe".to_string(),
                    email: "jane@x.com".to_string(),
                },
            }]
        );
    }

    #[test]
    fn preserves_upstream_order() {
        let body = r#"[
            {"sha":"c1","commit":{"author":{"name":"A","email":"a@x.com"}}},
            {"sha":"c2","commit":{"author":{"name":"B","email":"b@x.com"}}},
            {"sha":"c3","commit":{"author":{"name":"A","email":"a@x.com"}}}
        ]"#;
        let records = parse_commits(body).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn missing_email_fails_whole_batch() {
        let body = r#"[
            {"sha":"c1","commit":{"author":{"name":"A","email":"a@x.com"}}},
            {"sha":"c2","commit":{"author":{"name":"B"}}}
        ]"#;
        assert!(matches!(parse_commits(body), Err(FetchError::Parse(_))));
    }

    #[test]
    fn empty_sha_counts_as_missing() {
        let body = r#"[{"sha":"","commit":{"author":{"name":"A","email":"a@x.com"}}}]"#;
        assert!(matches!(parse_commits(body), Err(FetchError::Parse(_))));
    }

    #[test]
    fn missing_author_object_fails() {
        let body = r#"[{"sha":"c1","commit":{"author":null}}]"#;
        assert!(matches!(parse_commits(body), Err(FetchError::Parse(_))));
    }

    #[test]
    fn non_array_body_fails() {
        assert!(matches!(
            parse_commits(r#"{"message":"Not Found"}"#),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    fn empty_payload_is_empty_list() {
        assert!(parse_commits("[]").unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_owner_fails_before_any_request() {
        // Base URL that would refuse connections if it were ever contacted.
        let err = fetch_commits_from("http://127.0.0.1:1", "", "repo")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Input(_)));
    }

    #[tokio::test]
    async fn empty_repo_fails_before_any_request() {
        let err = fetch_commits_from("http://127.0.0.1:1", "owner", "")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Input(_)));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_an_upstream_error() {
        let err = fetch_commits_from("http://127.0.0.1:1", "ghost", "nope")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Upstream(_)));
    }
}
