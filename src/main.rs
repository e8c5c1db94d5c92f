// src/main.rs
// =============================================================================
// This is the entry point of the portfolio CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Load the config file (or the built-in defaults) and set up logging
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = rejected input, 2 = error)
//
// A failed GitHub fetch is not an error: the page simply has no projects.
// =============================================================================

mod cli;
mod config;
mod curate;
mod github;
mod logging;
mod page;
mod seo;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::fs;
use std::path::Path;

use cli::{Artifact, Cli, Commands, ThemeAction};
use config::Config;
use curate::ProjectCard;
use github::GitHubClient;
use page::{
    ambient_preference, load_featured, resolve_theme, ContactForm, LocalStorage, PageState, Theme,
};
use seo::SeoArtifacts;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    logging::init_logging(&config.log_level);
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Projects { json, count } => handle_projects(&config, json, count).await,
        Commands::Seo { artifact } => handle_seo(&config, artifact),
        Commands::Build { out_dir } => handle_build(&config, &out_dir).await,
        Commands::Theme { action } => handle_theme(&config, action),
        Commands::Contact {
            name,
            email,
            message,
        } => handle_contact(&name, &email, &message),
        Commands::Profile => handle_profile(&config),
    }
}

// Opens local storage and resolves the startup theme into a fresh page
fn open_page(config: &Config) -> Result<(PageState, LocalStorage)> {
    let store = LocalStorage::open(config.local_storage_path()?)?;
    let theme = resolve_theme(&store, ambient_preference());
    Ok((PageState::new(theme), store))
}

// Runs the project pipeline against the real GitHub API
//
// Local storage is not touched: the theme plays no part in the projects.
async fn load_page(config: &Config) -> Result<PageState> {
    let account = config.account()?;
    let client = GitHubClient::new(&config.github.api_base)?;
    let mut state = PageState::new(Theme::default());

    tracing::info!(account = %account, "fetching repositories");
    load_featured(&mut state, &client, &account, config).await;

    Ok(state)
}

// Handles the 'projects' subcommand
async fn handle_projects(config: &Config, json: bool, count: Option<usize>) -> Result<i32> {
    let mut config = config.clone();
    if let Some(count) = count {
        config.github.featured_count = count;
    }

    let state = load_page(&config).await?;
    tracing::info!(load = ?state.load_state(), projects = state.projects().len(), "page ready");
    print_results(state.projects(), json)?;
    Ok(0)
}

// Handles the 'seo' subcommand
fn handle_seo(config: &Config, artifact: Artifact) -> Result<i32> {
    let artifacts = SeoArtifacts::build(config, Utc::now());

    let output = match artifact {
        Artifact::Manifest => artifacts.manifest_json()?,
        Artifact::Robots => artifacts.robots_txt(),
        Artifact::Sitemap => artifacts.sitemap_xml(),
        Artifact::StructuredData => artifacts.structured_data_json()?,
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(0)
}

// Handles the 'build' subcommand
async fn handle_build(config: &Config, out_dir: &Path) -> Result<i32> {
    println!("📦 Building site artifacts into {}", out_dir.display());

    let artifacts = SeoArtifacts::build(config, Utc::now());
    let mut written = artifacts.write_all(out_dir)?;

    let state = load_page(config).await?;
    let projects_path = out_dir.join("projects.json");
    fs::write(&projects_path, serde_json::to_string_pretty(state.projects())?)
        .with_context(|| format!("Can't write '{}'", projects_path.display()))?;
    written.push(projects_path);

    for path in &written {
        println!("   ✅ {}", path.display());
    }
    println!("📊 {} featured project(s)", state.projects().len());
    Ok(0)
}

// Handles the 'theme' subcommand
fn handle_theme(config: &Config, action: ThemeAction) -> Result<i32> {
    let (mut state, mut store) = open_page(config)?;

    let theme = match action {
        ThemeAction::Show => state.theme(),
        ThemeAction::Toggle => state.toggle_theme(&mut store)?,
    };

    println!("{}", theme);
    Ok(0)
}

// Handles the 'contact' subcommand
fn handle_contact(name: &str, email: &str, message: &str) -> Result<i32> {
    let mut form = ContactForm::new(name, email, message);

    match form.submit() {
        Ok(confirmation) => {
            println!("✅ {}", confirmation);
            Ok(0)
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            Ok(1)
        }
    }
}

// Handles the 'profile' subcommand
fn handle_profile(config: &Config) -> Result<i32> {
    let profile = &config.profile;

    println!("{} - {}", profile.name, profile.job_title);
    println!();

    for (category, skills) in profile.skills_by_category() {
        println!("{}", category);
        for skill in skills {
            let filled = usize::from(skill.level.min(100)) / 5;
            println!(
                "   {:<20} {:<20} {:>3}%",
                skill.name,
                "█".repeat(filled),
                skill.level
            );
        }
        println!();
    }

    for experience in &profile.experiences {
        println!("{} @ {} ({})", experience.title, experience.company, experience.period);
        for line in &experience.description {
            println!("   • {}", line);
        }
        println!("   {}", experience.technologies.join(", "));
        println!();
    }

    Ok(0)
}

// Prints the cards either as a table or JSON
fn print_results(cards: &[ProjectCard], json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(cards)?;
        println!("{}", json_output);
    } else if cards.is_empty() {
        println!("⚠️  No projects to show");
    } else {
        print_table(cards);
    }
    Ok(())
}

// Prints cards as a human-readable table in the terminal
fn print_table(cards: &[ProjectCard]) {
    println!(
        "{:<30} {:<12} {:>6} {:>6} {:<11} {:<40}",
        "PROJECT", "LANGUAGE", "STARS", "FORKS", "UPDATED", "LINK"
    );
    println!("{}", "=".repeat(110));

    for card in cards {
        println!(
            "{:<30} {:<12} {:>6} {:>6} {:<11} {:<40}",
            truncate(&card.display_name, 30),
            truncate(&card.language, 12),
            card.stars,
            card.forks,
            card.updated,
            card.link
        );
    }

    println!();
    println!("📊 {} featured project(s)", cards.len());
}

// Shortens text to `width` characters, marking the cut with "..."
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}
