// src/config.rs
// =============================================================================
// Configuration for the portfolio, loaded from an optional TOML file.
//
// Every section has defaults that reproduce the live site, so the CLI works
// without any file. A file only needs the keys it wants to change:
//
//   log_level = "debug"
//
//   [github]
//   account = "https://github.com/octocat"
//   featured_count = 4
//
//   [site]
//   base_url = "https://octocat.dev"
// =============================================================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::curate::DEFAULT_FEATURED_COUNT;
use crate::github::{parse_account, MAX_PER_PAGE};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default tracing level; RUST_LOG overrides it
    pub log_level: String,
    pub github: GitHubConfig,
    pub site: SiteConfig,
    pub profile: ProfileConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Login or profile URL of the portfolio's account
    pub account: String,
    pub api_base: String,
    /// Repositories requested in the single listing call, clamped to 1..=100
    pub per_page: u16,
    /// Size of each featured group (top starred, top recent)
    pub featured_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub base_url: String,
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub lang: String,
    pub theme_color: String,
    pub background_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub job_title: String,
    pub description: String,
    /// Path of the profile photo, relative to the site root
    pub image: String,
    /// Other profiles of the same person (GitHub, LinkedIn, ...)
    pub same_as: Vec<String>,
    /// RFC 3339 timestamp used as datePublished/dateModified
    pub published: String,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 0-100
    pub level: u8,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key-value file standing in for browser local storage
    pub local_storage: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            github: GitHubConfig::default(),
            site: SiteConfig::default(),
            profile: ProfileConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            account: "aadesh0706".to_string(),
            api_base: "https://api.github.com".to_string(),
            per_page: 100,
            featured_count: DEFAULT_FEATURED_COUNT,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://aadeshgulumbe.live".to_string(),
            name: "Aadesh Gulumbe - Full Stack Developer Portfolio".to_string(),
            short_name: "Aadesh Gulumbe".to_string(),
            description: "Professional portfolio of Aadesh Gulumbe, Full Stack Developer specializing in React.js, Node.js, and TypeScript".to_string(),
            lang: "en".to_string(),
            theme_color: "#2563eb".to_string(),
            background_color: "#ffffff".to_string(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Aadesh Gulumbe".to_string(),
            job_title: "Full Stack Developer".to_string(),
            description: "Experienced Full Stack Developer specializing in React.js, Node.js, TypeScript, and modern web technologies".to_string(),
            image: "/profile.jpeg".to_string(),
            same_as: vec![
                "https://github.com/aadesh0706".to_string(),
                "https://linkedin.com/in/aadeshgulumbe".to_string(),
            ],
            published: "2025-09-07T00:00:00+00:00".to_string(),
            skills: default_skills(),
            experiences: default_experiences(),
        }
    }
}

fn skill(name: &str, level: u8, category: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        category: category.to_string(),
    }
}

fn default_skills() -> Vec<Skill> {
    vec![
        skill("JavaScript", 90, "Frontend"),
        skill("React.js", 85, "Frontend"),
        skill("Next.js", 80, "Frontend"),
        skill("TypeScript", 85, "Frontend"),
        skill("Node.js", 75, "Backend"),
        skill("Python", 80, "Backend"),
        skill("IoT Development", 75, "Embedded"),
        skill("Arduino/ESP32", 85, "Embedded"),
        skill("Database Design", 70, "Backend"),
        skill("Cloud Services", 65, "DevOps"),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_experiences() -> Vec<Experience> {
    vec![
        Experience {
            title: "Full Stack Developer".to_string(),
            company: "Tech Innovation Hub".to_string(),
            period: "2023 - Present".to_string(),
            description: strings(&[
                "Developed responsive web applications using React.js and Next.js",
                "Implemented IoT solutions for smart home automation systems",
                "Collaborated with cross-functional teams to deliver high-quality products",
                "Optimized application performance resulting in 40% faster load times",
            ]),
            technologies: strings(&["React", "Next.js", "Node.js", "IoT", "MongoDB"]),
        },
        Experience {
            title: "IoT Developer".to_string(),
            company: "Smart Solutions Ltd".to_string(),
            period: "2022 - 2023".to_string(),
            description: strings(&[
                "Designed and developed IoT devices using Arduino and ESP32",
                "Created web dashboards for device monitoring and control",
                "Integrated cloud services for real-time data processing",
                "Reduced power consumption of devices by 30% through optimization",
            ]),
            technologies: strings(&["Arduino", "ESP32", "Python", "AWS IoT", "React"]),
        },
    ]
}

impl ProfileConfig {
    // Groups skills by category, categories in order of first appearance
    pub fn skills_by_category(&self) -> Vec<(&str, Vec<&Skill>)> {
        let mut groups: Vec<(&str, Vec<&Skill>)> = Vec::new();

        for skill in &self.skills {
            match groups.iter_mut().find(|(category, _)| *category == skill.category) {
                Some((_, members)) => members.push(skill),
                None => groups.push((skill.category.as_str(), vec![skill])),
            }
        }

        groups
    }
}

impl Config {
    // Loads the config file, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;

        Ok(config)
    }

    // Catches mistakes early instead of failing halfway through a build
    fn validate(&self) -> Result<()> {
        self.account()?;
        self.site_url()?;
        Ok(())
    }

    /// The GitHub login, whether configured bare or as a profile URL
    pub fn account(&self) -> Result<String> {
        parse_account(&self.github.account)
    }

    /// The parsed site base URL
    pub fn site_url(&self) -> Result<Url> {
        let raw = &self.site.base_url;
        let url = Url::parse(raw).with_context(|| format!("Invalid site base_url '{}'", raw))?;
        Ok(url)
    }

    /// The page size actually requested from GitHub
    pub fn per_page(&self) -> u8 {
        let clamped = self.github.per_page.clamp(1, u16::from(MAX_PER_PAGE));
        u8::try_from(clamped).unwrap_or(MAX_PER_PAGE)
    }

    /// `base_url` without a trailing slash, for string concatenation
    pub fn base_url(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }

    // Where the local storage file lives
    //
    // Defaults to ~/.config/portfolio/local-storage.json
    pub fn local_storage_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.storage.local_storage {
            return Ok(path.clone());
        }

        let home = std::env::var("HOME").context("No HOME directory to store local storage in")?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("portfolio")
            .join("local-storage.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_live_site() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.account().unwrap(), "aadesh0706");
        assert_eq!(config.github.per_page, 100);
        assert_eq!(config.github.featured_count, 3);
        assert_eq!(config.base_url(), "https://aadeshgulumbe.live");
        assert_eq!(config.profile.skills.len(), 10);
        assert_eq!(config.profile.experiences.len(), 2);
    }

    #[test]
    fn test_skills_by_category() {
        let profile = ProfileConfig::default();
        let groups = profile.skills_by_category();

        let categories: Vec<&str> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, vec!["Frontend", "Backend", "Embedded", "DevOps"]);
        assert_eq!(groups[0].1.len(), 4);
        assert_eq!(groups[1].1[2].name, "Database Design");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
log_level = "debug"

[github]
account = "https://github.com/octocat"
featured_count = 4

[site]
base_url = "https://octocat.dev/"

[storage]
local_storage = "/tmp/portfolio-test.json"
"#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.account().unwrap(), "octocat");
        assert_eq!(config.github.featured_count, 4);
        assert_eq!(config.github.per_page, 100);
        assert_eq!(config.base_url(), "https://octocat.dev");
        assert_eq!(config.site.short_name, "Aadesh Gulumbe");
        assert_eq!(
            config.local_storage_path().unwrap(),
            PathBuf::from("/tmp/portfolio-test.json")
        );
    }

    #[test]
    fn test_per_page_is_clamped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[github]\nper_page = 500").unwrap();

        let mut config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.github.per_page, 500);
        assert_eq!(config.per_page(), 100);

        config.github.per_page = 0;
        assert_eq!(config.per_page(), 1);

        config.github.per_page = 30;
        assert_eq!(config.per_page(), 30);
    }

    #[test]
    fn test_invalid_account_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[github]\naccount = \"https://gitlab.com/octocat\"").unwrap();
        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
