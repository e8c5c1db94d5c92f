// src/page/mod.rs
// =============================================================================
// This module holds the page-level pieces around the project pipeline.
//
// Submodules:
// - state: the explicit PageState container and its transitions
// - theme: light/dark theme and its local-storage persistence
// - contact: the contact form (log-only for now)
// =============================================================================

mod contact;
mod state;
mod theme;

pub use contact::ContactForm;
pub use state::PageState;
pub use theme::{ambient_preference, resolve_theme, LocalStorage, Theme};

use crate::config::Config;
use crate::curate::curate;
use crate::github::{fetch_or_empty, RepositorySource};

// Runs Fetcher -> Curator -> Mapper and applies the result to the page
//
// The page always ends up Loaded, even if the fetch failed (it then simply
// has no projects). Returns false if the result was discarded because the
// page was torn down while the fetch was in flight.
pub async fn load_featured(
    state: &mut PageState,
    source: &dyn RepositorySource,
    account: &str,
    config: &Config,
) -> bool {
    let ticket = state.begin_load();

    let repos = fetch_or_empty(source, account, config.per_page()).await;
    let cards = curate(&repos, account, config.github.featured_count);

    state.finish_load(ticket, cards)
}
