// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Subcommands:
// - projects: fetch and curate the featured GitHub projects
// - seo:      print one SEO artifact
// - build:    write every artifact (and projects.json) to a directory
// - theme:    show or toggle the persisted light/dark theme
// - contact:  submit the contact form
// - profile:  print skills and experience
// =============================================================================

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "portfolio",
    version,
    about = "Curate featured GitHub projects and generate SEO files for a portfolio site",
    long_about = "portfolio fetches a developer's public GitHub repositories, picks the most \
                  starred and most recently pushed ones, and generates the manifest, robots.txt, \
                  sitemap and structured data the portfolio site serves."
)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch, curate and print the featured projects
    ///
    /// Example: portfolio projects --json
    Projects {
        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,

        /// Size of each featured group (overrides the config file)
        #[arg(long)]
        count: Option<usize>,
    },

    /// Print one SEO artifact to stdout
    ///
    /// Example: portfolio seo robots
    Seo {
        #[arg(value_enum)]
        artifact: Artifact,
    },

    /// Write all SEO artifacts and projects.json into a directory
    ///
    /// Example: portfolio build --out-dir public
    Build {
        /// Directory to write into (created if missing)
        #[arg(long, default_value = "public")]
        out_dir: PathBuf,
    },

    /// Show or toggle the light/dark theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },

    /// Submit the contact form (logged only, nothing is sent)
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },

    /// Print skills by category and work experience
    Profile,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Artifact {
    Manifest,
    Robots,
    Sitemap,
    StructuredData,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does `global = true` do?
//    - The --config flag is accepted before or after the subcommand:
//      `portfolio --config site.toml build` and `portfolio build --config site.toml`
//
// 2. What is ValueEnum?
//    - Lets clap parse a fixed set of words into an enum
//    - `StructuredData` is spelled `structured-data` on the command line
//
// 3. Why Option<usize> for --count?
//    - None means "not given", so the config file value is used
// -----------------------------------------------------------------------------
