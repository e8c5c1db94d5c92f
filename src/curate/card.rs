// src/curate/card.rs
// =============================================================================
// The view model for one featured project.
//
// A card is everything the presentation layer needs to draw a project
// tile, already resolved: display name, fallback description, preview image
// and the link the tile opens.
// =============================================================================

use serde::Serialize;

use super::image::{display_image_id, image_url, DisplayImageId};
use crate::github::RepositorySummary;

/// Shown when a repository has no description
pub const PLACEHOLDER_DESCRIPTION: &str =
    "An innovative project showcasing modern development practices and cutting-edge technologies.";

/// Shown as the language badge when GitHub reports no language
const PLACEHOLDER_LANGUAGE: &str = "Project";

/// Shown as the date of a repository that was never pushed to
const UNKNOWN_DATE: &str = "unknown";

/// Topics beyond this many are not shown on a card
const MAX_TOPICS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub id: u64,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub language: String,
    pub stars: u32,
    pub forks: u32,
    pub topics: Vec<String>,
    /// Last push date, `YYYY-MM-DD`, or "unknown"
    pub updated: String,
    pub image_id: DisplayImageId,
    pub image_url: String,
    /// Where clicking the card goes: homepage if set, else the repository
    pub link: String,
    pub source_url: String,
}

impl From<&RepositorySummary> for ProjectCard {
    fn from(repo: &RepositorySummary) -> Self {
        let image_id = display_image_id(&repo.name);

        ProjectCard {
            id: repo.id,
            name: repo.name.clone(),
            display_name: display_name(&repo.name),
            description: repo
                .description
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_DESCRIPTION.to_string()),
            language: repo
                .language
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_LANGUAGE.to_string()),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            topics: repo.topics.iter().take(MAX_TOPICS).cloned().collect(),
            updated: repo
                .pushed_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
            image_id,
            image_url: image_url(image_id),
            link: repo.homepage.clone().unwrap_or_else(|| repo.html_url.clone()),
            source_url: repo.html_url.clone(),
        }
    }
}

// Turns "iot-smart-home" into "Iot Smart Home"
//
// Only the first letter of each word is touched; the rest keeps its case.
pub fn display_name(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample() -> RepositorySummary {
        RepositorySummary {
            id: 7,
            name: "iot-smart-home".to_string(),
            description: None,
            html_url: "https://github.com/aadesh0706/iot-smart-home".to_string(),
            language: None,
            stargazers_count: 12,
            forks_count: 3,
            pushed_at: Some(Utc.with_ymd_and_hms(2025, 3, 14, 8, 30, 0).unwrap()),
            topics: vec!["iot".into(), "esp32".into(), "mqtt".into(), "home".into()],
            homepage: None,
        }
    }

    #[test]
    fn test_card_fills_placeholders() {
        let card = ProjectCard::from(&sample());

        assert_eq!(card.display_name, "Iot Smart Home");
        assert_eq!(card.description, PLACEHOLDER_DESCRIPTION);
        assert_eq!(card.language, "Project");
        assert_eq!(card.topics, vec!["iot", "esp32", "mqtt"]);
        assert_eq!(card.updated, "2025-03-14");
        assert_eq!(card.image_id, DisplayImageId(960));
        assert_eq!(card.image_url, "https://picsum.photos/400/250?random=960");
    }

    #[test]
    fn test_missing_push_date() {
        let mut repo = sample();
        repo.pushed_at = None;
        assert_eq!(ProjectCard::from(&repo).updated, "unknown");
    }

    #[test]
    fn test_link_prefers_homepage() {
        let mut repo = sample();
        let card = ProjectCard::from(&repo);
        assert_eq!(card.link, repo.html_url);

        repo.homepage = Some("https://home.example.com".to_string());
        let card = ProjectCard::from(&repo);
        assert_eq!(card.link, "https://home.example.com");
        assert_eq!(card.source_url, repo.html_url);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("web-app"), "Web App");
        assert_eq!(display_name("misc"), "Misc");
        assert_eq!(display_name("React-native--x"), "React Native  X");
        assert_eq!(display_name("myAPI-server"), "MyAPI Server");
    }
}
