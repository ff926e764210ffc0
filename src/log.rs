// src/log.rs
//
// Subscriber setup. The library only emits `tracing` events; each binary
// picks where they go. `RUST_LOG` overrides the default filter.

use std::{
    fs::{self, OpenOptions},
    io,
    path::PathBuf,
    sync::Mutex,
};

use tracing_subscriber::{fmt::time::Uptime, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};

const DEFAULT_FILTER: &str = "chart_scrape=debug";

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// GUI: append to `.store/debug.log`, elapsed-time stamps, no colors.
pub fn init_file() -> io::Result<()> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    // A second init (tests, re-entry) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_env_filter(filter(DEFAULT_FILTER))
        .try_init();
    Ok(())
}

/// CLI: stderr, so stdout stays clean for exported data.
pub fn init_stderr(verbose: bool) {
    let default = if verbose { DEFAULT_FILTER } else { "chart_scrape=warn" };
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(filter(default))
        .try_init();
}
