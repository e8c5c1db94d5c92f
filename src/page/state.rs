// src/page/state.rs
// =============================================================================
// All mutable state of one page view, in one place.
//
// Fields only change through the named transitions below:
// - begin_load / finish_load: Loading -> Loaded, exactly once per ticket
// - teardown: invalidates outstanding tickets, so a fetch that resolves
//   after the view is gone is dropped instead of applied
// - toggle_theme: Light <-> Dark, persisted to local storage
// =============================================================================

use anyhow::Result;
use serde::Serialize;

use super::theme::{LocalStorage, Theme, THEME_KEY};
use crate::curate::ProjectCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Loading,
    Loaded,
}

/// Proof that a load was started for a given generation of the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

#[derive(Debug, Serialize)]
pub struct PageState {
    load: LoadState,
    theme: Theme,
    projects: Vec<ProjectCard>,
    #[serde(skip)]
    generation: u64,
}

impl PageState {
    /// A fresh view starts out loading, with the resolved startup theme
    pub fn new(theme: Theme) -> Self {
        Self {
            load: LoadState::Loading,
            theme,
            projects: Vec::new(),
            generation: 0,
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn projects(&self) -> &[ProjectCard] {
        &self.projects
    }

    // Hands out a ticket for the current generation of the view
    pub fn begin_load(&mut self) -> LoadTicket {
        LoadTicket {
            generation: self.generation,
        }
    }

    // Applies a finished load
    //
    // Returns false (and changes nothing) when the ticket is stale, i.e. the
    // view was torn down after the load began. Otherwise the state becomes
    // Loaded regardless of whether any projects arrived.
    pub fn finish_load(&mut self, ticket: LoadTicket, projects: Vec<ProjectCard>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding late load result"
            );
            return false;
        }

        self.projects = projects;
        self.load = LoadState::Loaded;
        true
    }

    // The view went away: outstanding loads must not land
    pub fn teardown(&mut self) {
        self.generation += 1;
    }

    // Flips the theme and remembers the choice
    pub fn toggle_theme(&mut self, store: &mut LocalStorage) -> Result<Theme> {
        let next = self.theme.toggled();
        store.set(THEME_KEY, next.as_str())?;
        self.theme = next;
        tracing::info!(theme = %next, "theme toggled");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_transitions_once() {
        let mut state = PageState::new(Theme::Light);
        assert_eq!(state.load_state(), LoadState::Loading);

        let ticket = state.begin_load();
        assert!(state.finish_load(ticket, vec![]));
        assert_eq!(state.load_state(), LoadState::Loaded);
        assert!(state.projects().is_empty());
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut state = PageState::new(Theme::Light);
        let ticket = state.begin_load();

        state.teardown();

        assert!(!state.finish_load(ticket, vec![]));
        assert_eq!(state.load_state(), LoadState::Loading);
    }

    #[test]
    fn test_toggle_theme_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let mut store = LocalStorage::open(&path).unwrap();
        let mut state = PageState::new(Theme::Light);

        assert_eq!(state.toggle_theme(&mut store).unwrap(), Theme::Dark);
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(LocalStorage::open(&path).unwrap().get(THEME_KEY), Some("dark"));

        assert_eq!(state.toggle_theme(&mut store).unwrap(), Theme::Light);
        assert_eq!(LocalStorage::open(&path).unwrap().get(THEME_KEY), Some("light"));
    }

    #[test]
    fn test_state_serializes_for_render() {
        let state = PageState::new(Theme::Dark);
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "load": "loading", "theme": "dark", "projects": [] })
        );
    }
}
