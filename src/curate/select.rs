// src/curate/select.rs
// =============================================================================
// This module picks the featured projects out of the raw repository list.
//
// How it works:
// 1. Drop repositories that should never be shown (GitHub Pages sites, the
//    self-named profile repository, config repositories)
// 2. Rank what is left by stars and take the top N
// 3. Rank the same list again by last push and take the top N that were
//    not already picked in step 2
// 4. Starred first, then recent
//
// Everything here is a pure function over borrowed input.
// =============================================================================

use std::collections::HashSet;

use crate::github::RepositorySummary;

/// How many repositories each ranking contributes by default
pub const DEFAULT_FEATURED_COUNT: usize = 3;

/// The featured projects, in render order.
///
/// `starred` and `recent` never share an id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturedSelection {
    pub starred: Vec<RepositorySummary>,
    pub recent: Vec<RepositorySummary>,
}

impl FeaturedSelection {
    pub fn len(&self) -> usize {
        self.starred.len() + self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starred.is_empty() && self.recent.is_empty()
    }

    /// All featured repositories, starred group first
    pub fn iter(&self) -> impl Iterator<Item = &RepositorySummary> {
        self.starred.iter().chain(self.recent.iter())
    }

    pub fn into_vec(self) -> Vec<RepositorySummary> {
        let mut all = self.starred;
        all.extend(self.recent);
        all
    }
}

// Decides whether a repository name is hidden from the portfolio
//
// Parameters:
//   name: repository name as GitHub reports it
//   account: the portfolio's own GitHub login
//
// Note the mixed case rules: ".github.io" and the account name are matched
// exactly, "config" is matched case-insensitively.
pub fn is_excluded(name: &str, account: &str) -> bool {
    name.contains(".github.io") || name == account || name.to_lowercase().contains("config")
}

// Returns the repositories that survive the exclusion filter, in input order
pub fn filter_repositories(repos: &[RepositorySummary], account: &str) -> Vec<RepositorySummary> {
    repos
        .iter()
        .filter(|repo| {
            let excluded = is_excluded(&repo.name, account);
            if excluded {
                tracing::debug!(name = %repo.name, "excluding repository");
            }
            !excluded
        })
        .cloned()
        .collect()
}

// Builds the featured selection from a raw repository list
//
// Parameters:
//   repos: the fetch result, in whatever order GitHub returned it
//   account: the portfolio's own login (its self-named repo is excluded)
//   count: size bound N of each group
//
// Ties keep their input order: both sorts are stable, so the same input
// always yields the same selection.
pub fn select_featured(
    repos: &[RepositorySummary],
    account: &str,
    count: usize,
) -> FeaturedSelection {
    let filtered = filter_repositories(repos, account);

    let mut by_stars = filtered.clone();
    by_stars.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    by_stars.truncate(count);

    let starred_ids: HashSet<u64> = by_stars.iter().map(|repo| repo.id).collect();

    // Sorted independently from the full filtered list, not from by_stars.
    // A missing push time is None, which sorts last when descending.
    let mut by_push = filtered;
    by_push.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at));
    let recent: Vec<RepositorySummary> = by_push
        .into_iter()
        .filter(|repo| !starred_ids.contains(&repo.id))
        .take(count)
        .collect();

    tracing::info!(
        starred = by_stars.len(),
        recent = recent.len(),
        "selected featured repositories"
    );

    FeaturedSelection {
        starred: by_stars,
        recent,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is sort_by "stable"?
//    - Vec::sort_by never reorders elements that compare equal
//    - Two repos with the same star count keep the order GitHub sent them in
//    - sort_unstable_by would be slightly faster but not deterministic here
//
// 2. Why b.cmp(&a) instead of a.cmp(&b)?
//    - Swapping the operands reverses the order: highest first
//
// 3. Why a HashSet for the starred ids?
//    - contains() is O(1), so the de-duplication is a single pass
// -----------------------------------------------------------------------------
