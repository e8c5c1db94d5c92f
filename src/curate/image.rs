// src/curate/image.rs
// =============================================================================
// This module picks a decorative preview image for each featured project.
//
// The image is chosen from the repository name alone:
// - If the name mentions a known technology, that technology's image is used
// - Otherwise a small hash of the name picks one of 100 stable images
//
// The same name must always map to the same image, otherwise previews would
// shuffle on every reload.
// =============================================================================

use serde::Serialize;
use std::fmt;

/// Keyword table, checked in order. First match wins, not best match.
const KEYWORD_IMAGES: &[(&str, u32)] = &[
    ("web", 1060),
    ("react", 1040),
    ("javascript", 1020),
    ("node", 1000),
    ("python", 980),
    ("iot", 960),
    ("arduino", 940),
    ("esp32", 920),
    ("dashboard", 900),
    ("api", 880),
    ("mobile", 860),
    ("frontend", 840),
    ("backend", 820),
    ("fullstack", 800),
];

/// Base of the hash fallback range [1000, 1099]
const HASH_BASE: u32 = 1000;

/// Picks the image id used in the image service query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DisplayImageId(pub u32);

impl fmt::Display for DisplayImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Maps a repository name to its display image id
//
// Example:
//   "React-Native-App" -> 1040 (matches "react" case-insensitively)
//   "misc"             -> 1088 (no keyword, hash fallback)
pub fn display_image_id(name: &str) -> DisplayImageId {
    let lower = name.to_lowercase();

    KEYWORD_IMAGES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|&(_, id)| DisplayImageId(id))
        .unwrap_or_else(|| DisplayImageId(HASH_BASE + name_hash(name) % 100))
}

// Folds the UTF-16 code units of the name into a wrapping 32-bit signed
// accumulator: acc = (acc << 5) - acc + unit
//
// The result is |acc|, where |i32::MIN| is 2^31 (unsigned_abs cannot overflow).
fn name_hash(name: &str) -> u32 {
    let acc = name.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add(i32::from(unit))
    });
    acc.unsigned_abs()
}

/// Full preview URL for an image id
pub fn image_url(id: DisplayImageId) -> String {
    format!("https://picsum.photos/400/250?random={}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        // Scenario D
        assert_eq!(display_image_id("React-Native-App"), DisplayImageId(1040));
        assert_eq!(display_image_id("IOT-Dashboard"), DisplayImageId(960));
    }

    #[test]
    fn test_first_keyword_in_table_order_wins() {
        // "react" appears first in the name, but "web" comes first in the table
        assert_eq!(display_image_id("react-web-starter"), DisplayImageId(1060));
        assert_eq!(display_image_id("fullstack-node-api"), DisplayImageId(1000));
        assert_eq!(display_image_id("esp32-dashboard"), DisplayImageId(920));
    }

    #[test]
    fn test_every_table_entry_is_reachable() {
        for (keyword, id) in KEYWORD_IMAGES {
            assert_eq!(display_image_id(keyword), DisplayImageId(*id), "{}", keyword);
        }
    }

    #[test]
    fn test_hash_fallback_known_values() {
        assert_eq!(display_image_id("misc"), DisplayImageId(1088));
        assert_eq!(display_image_id("portfolio"), DisplayImageId(1064));
        assert_eq!(display_image_id("rust-cli"), DisplayImageId(1039));
    }

    #[test]
    fn test_hash_wraps_like_32_bit_arithmetic() {
        // These names overflow i32 while folding
        assert_eq!(name_hash("hello-world"), 2128682281);
        assert_eq!(display_image_id("hello-world"), DisplayImageId(1081));
        assert_eq!(
            display_image_id("a-very-long-repository-name-that-overflows"),
            DisplayImageId(1028)
        );
    }

    #[test]
    fn test_hash_uses_original_case_and_utf16_units() {
        // Keyword matching lower-cases, the hash does not
        assert_eq!(name_hash("Portfolio"), 1169218264);
        assert_eq!(display_image_id("Portfolio"), DisplayImageId(1064));
        assert_eq!(display_image_id("café-ü"), DisplayImageId(1068));
    }

    #[test]
    fn test_hash_fallback_stays_in_range() {
        for name in ["", "x", "misc", "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz", "🦀-crab", "日本語"] {
            let DisplayImageId(id) = display_image_id(name);
            assert!((1000..=1099).contains(&id), "{} -> {}", name, id);
        }
    }

    #[test]
    fn test_mapping_is_deterministic() {
        for name in ["misc", "web-app", "hello-world", "Portfolio"] {
            assert_eq!(display_image_id(name), display_image_id(name));
        }
    }

    #[test]
    fn test_image_url() {
        assert_eq!(
            image_url(DisplayImageId(1060)),
            "https://picsum.photos/400/250?random=1060"
        );
    }
}
