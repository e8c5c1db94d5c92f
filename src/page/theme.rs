// src/page/theme.rs
// =============================================================================
// Light/dark theme and the key-value store it is persisted in.
//
// The store is a small JSON object on disk that plays the role of the
// browser's local storage: string keys, string values, written through on
// every set.
//
// Theme resolution at startup:
// 1. "theme" key in the store: "dark" is dark, any other value is light
// 2. nothing stored: the ambient preference (terminal background, see
//    ambient_preference)
// =============================================================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Local storage key holding the theme
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    // Parses a stored value; anything but the two known values is ignored
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File-backed string key-value store
#[derive(Debug)]
pub struct LocalStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl LocalStorage {
    // Opens the store at `path`; a missing file is an empty store
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Can't read local storage '{}'", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "local storage is corrupt, starting empty");
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    // Sets a key and writes the whole store back to disk
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Can't create local storage directory '{}'", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Can't write local storage '{}'", self.path.display()))?;
        Ok(())
    }
}

// Picks the startup theme
//
// The ambient preference only applies when nothing (or "") is stored. A
// stored value that is not a known theme counts as light.
pub fn resolve_theme(store: &LocalStorage, ambient: Theme) -> Theme {
    match store.get(THEME_KEY) {
        None | Some("") => ambient,
        Some(value) => Theme::from_stored(value).unwrap_or(Theme::Light),
    }
}

// Reads the ambient preference from the terminal
//
// COLORFGBG is set by many terminals as "fg;bg" (sometimes "fg;default;bg").
// Background colour indices 0-6 and 8 are the dark ANSI colours.
pub fn ambient_preference() -> Theme {
    std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .map(theme_from_colorfgbg)
        .unwrap_or_default()
}

fn theme_from_colorfgbg(value: &str) -> Theme {
    match value.rsplit(';').next().and_then(|bg| bg.trim().parse::<u8>().ok()) {
        Some(0..=6) | Some(8) => Theme::Dark,
        _ => Theme::Light,
    }
}
