// src/log.rs
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::{LOG_FILE, STORE_DIR};

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// CLI: compact lines on stderr so stdout stays the user-facing report.
pub fn init_cli(verbose: bool) {
    let default = if verbose { "ecourts_scrape=debug" } else { "ecourts_scrape=warn" };

    let _ = tracing_subscriber::registry()
        .with(filter(default))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

/// GUI: no console, so append to `.store/debug.log`.
/// Logging is best-effort; if the file can't be opened we run without it.
pub fn init_gui() {
    let dir = PathBuf::from(STORE_DIR);
    if crate::file::ensure_directory(&dir).is_err() {
        return;
    }
    let path = dir.join(LOG_FILE);
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = tracing_subscriber::registry()
        .with(filter("ecourts_scrape=debug"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init();
}
