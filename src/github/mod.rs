// src/github/mod.rs
// =============================================================================
// This module loads the repository list of the portfolio's GitHub account.
//
// Currently implements:
// - The RepositorySummary payload type
// - The RepositorySource trait and its GitHub REST implementation
// - Degrading fetch failures to an empty list
// - Parsing the configured account (login or profile URL)
// =============================================================================

mod fetch;
mod model;

pub use fetch::{
    fetch_or_empty, parse_account, FetchError, GitHubClient, RepositorySource, MAX_PER_PAGE,
};
pub use model::RepositorySummary;

#[cfg(test)]
pub use fetch::MockRepositorySource;
