// src/github/fetch.rs
// =============================================================================
// This module fetches the repository list of a GitHub account.
//
// Strategy:
// - One GET to /users/{account}/repos?sort=updated&per_page=100
// - No authentication, no pagination, no retries
// - Any failure (network, HTTP status, JSON) becomes a FetchError, and
//   fetch_or_empty() turns that into "no projects"
//
// The network call sits behind the RepositorySource trait so the rest of
// the pipeline can be tested without touching GitHub.
// =============================================================================

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use super::model::RepositorySummary;

#[cfg(test)]
use mockall::automock;

/// GitHub caps `per_page` at 100
pub const MAX_PER_PAGE: u8 = 100;

/// Everything that can go wrong while loading the repository list
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure: DNS, TLS, connection reset, ...
    #[error("request to GitHub failed: {0}")]
    Request(#[from] reqwest::Error),
    /// GitHub answered, but not with a 2xx
    #[error("GitHub responded with HTTP {0}")]
    Status(StatusCode),
    /// The body was not the JSON array we expected
    #[error("could not decode repository list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Something that can list the repositories of an account.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn list_repositories(
        &self,
        account: &str,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, FetchError>;
}

/// The real RepositorySource, backed by the GitHub REST API
pub struct GitHubClient {
    client: Client,
    api_base: String,
}

impl GitHubClient {
    // Creates a client for the given API base (normally https://api.github.com)
    //
    // No timeout is configured on purpose: the platform default applies.
    pub fn new(api_base: &str) -> Result<Self> {
        let client = Client::builder()
            // GitHub rejects requests without a User-Agent
            .user_agent(concat!("portfolio-site/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    // Builds the listing URL for an account
    //
    // Example:
    //   ("https://api.github.com", "octocat", 100)
    //   -> "https://api.github.com/users/octocat/repos?sort=updated&per_page=100"
    fn repos_url(&self, account: &str, per_page: u8) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.api_base,
            account,
            per_page.clamp(1, MAX_PER_PAGE)
        )
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn list_repositories(
        &self,
        account: &str,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, FetchError> {
        let url = self.repos_url(account, per_page);
        tracing::debug!(%url, "requesting repository list");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        // Decode separately so a bad body is reported as Decode, not Request
        let body = response.text().await?;
        let repos = serde_json::from_str(&body)?;
        Ok(repos)
    }
}

// Loads the repository list, degrading any failure to an empty list
//
// This is the only place a FetchError is observed. The caller cannot tell
// "fetch failed" from "account has no repositories"; the warning in the log
// is the only trace of the failure.
pub async fn fetch_or_empty(
    source: &dyn RepositorySource,
    account: &str,
    per_page: u8,
) -> Vec<RepositorySummary> {
    match source.list_repositories(account, per_page).await {
        Ok(repos) => {
            tracing::info!(account, count = repos.len(), "fetched repositories");
            repos
        }
        Err(e) => {
            tracing::warn!(account, error = %e, "error fetching GitHub repos");
            Vec::new()
        }
    }
}

// Extracts the account login from a config value
//
// Supported formats:
//   - octocat
//   - https://github.com/octocat
//   - github.com/octocat/
//
// Returns: the login, or an error if the value is not a GitHub profile
pub fn parse_account(value: &str) -> Result<String> {
    let value = value.trim();

    // A bare login has no slashes and no dots
    if !value.is_empty() && !value.contains('/') && !value.contains('.') {
        return Ok(value.to_string());
    }

    let with_scheme = if value.contains("://") {
        value.to_string()
    } else {
        format!("https://{}", value)
    };

    let url = Url::parse(&with_scheme)
        .map_err(|e| anyhow!("Invalid GitHub profile '{}': {}", value, e))?;

    let host = url.host_str().unwrap_or_default().trim_start_matches("www.");
    if host != "github.com" {
        return Err(anyhow!("Not a GitHub URL: {}", value));
    }

    // Only a profile is accepted, not a repository URL
    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|p| !p.is_empty()).collect())
        .unwrap_or_default();

    match segments.as_slice() {
        [login] => Ok(login.to_string()),
        _ => Err(anyhow!("Invalid GitHub profile URL format: {}", value)),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait for a single HTTP call?
//    - The curator and page state only need "something that lists repos"
//    - Tests plug in a MockRepositorySource (generated by mockall)
//    - `&dyn RepositorySource` lets callers pick the implementation at runtime
//
// 2. What does #[async_trait] do?
//    - It rewrites `async fn` in traits into functions returning boxed futures
//    - Needed so the trait can be used as `dyn RepositorySource`
//
// 3. Why thiserror here and anyhow elsewhere?
//    - FetchError is matched on and logged with a precise message
//    - anyhow is for application plumbing where we only add context
//
// 4. What does #[from] do?
//    - Generates From<reqwest::Error> for FetchError
//    - That is what lets `?` convert the reqwest error automatically
// -----------------------------------------------------------------------------
