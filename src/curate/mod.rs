// src/curate/mod.rs
// =============================================================================
// This module turns the raw repository list into featured project cards.
//
// Submodules:
// - select: exclusion filter and the starred/recent ranking
// - image: deterministic preview image per repository name
// - card: the view model handed to the presentation layer
// =============================================================================

mod card;
mod image;
mod select;

pub use card::ProjectCard;
pub use select::DEFAULT_FEATURED_COUNT;

use crate::github::RepositorySummary;
use select::select_featured;

// Runs the curator and the mapper: raw repositories in, cards out
//
// Cards come out in render order: the starred group, then the recent group.
pub fn curate(repos: &[RepositorySummary], account: &str, count: usize) -> Vec<ProjectCard> {
    select_featured(repos, account, count)
        .iter()
        .map(ProjectCard::from)
        .collect()
}
