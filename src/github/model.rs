// src/github/model.rs
// =============================================================================
// The shape of one repository as returned by the GitHub REST API.
//
// GitHub sends ~80 fields per repository; we only declare the ones the
// portfolio uses. serde ignores everything else by default.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One repository from `GET /users/{account}/repos`.
///
/// Values are never mutated after decoding: the curator only filters and
/// re-orders them into new vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Stable per repository, used for de-duplication
    pub id: u64,
    pub name: String,
    /// `None` when GitHub sends `null`
    pub description: Option<String>,
    /// The repository's own page on github.com
    pub html_url: String,
    /// Primary language label
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    /// Last push time, the ranking key for "most recent".
    ///
    /// GitHub sends `null` for a repository that was never pushed to. `None`
    /// orders before every date, so such a repository ranks as the oldest.
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub topics: Vec<String>,
    /// GitHub sends `""` for a cleared homepage, so that is folded into `None`
    #[serde(default, deserialize_with = "empty_as_none")]
    pub homepage: Option<String>,
}

// Deserializes an optional string, mapping "" (and whitespace) to None
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
