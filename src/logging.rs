// src/logging.rs
// =============================================================================
// Sets up tracing output for the CLI.
//
// Logs go to stderr so `--json` output on stdout stays machine-readable.
// RUST_LOG, when set, takes precedence over the configured level.
// =============================================================================

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{fmt, EnvFilter};

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// Installs the global subscriber
//
// An unknown level falls back to "info" with a warning once the subscriber
// is up (there is nobody to log to before that).
pub fn init_logging(level: &str) {
    let (level, invalid) = normalize_level(level);

    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse::<Directive>()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        )
        .parse_lossy(std::env::var("RUST_LOG").unwrap_or_default());

    // try_init: a second call (e.g. from tests) is not an error
    let _ = fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();

    if let Some(given) = invalid {
        tracing::warn!("Invalid log level '{}', defaulting to 'info'", given);
    }
}

// Returns the level to use, plus the rejected input if it was not valid
fn normalize_level(level: &str) -> (&'static str, Option<String>) {
    let lower = level.trim().to_lowercase();
    match LEVELS.iter().find(|l| **l == lower) {
        Some(l) => (*l, None),
        None => ("info", Some(level.to_string())),
    }
}
