//! Tracing setup.
//!
//! The game owns stdout in raw mode, so log lines go to a file or nowhere.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "memory_match=debug,memory_match_core=debug"
    } else {
        "memory_match=info,memory_match_core=info"
    }
}

/// Install a file-backed subscriber. Returns `false` when no file was given.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_file_logger(log_file: Option<&Path>, verbose: bool) -> Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(true)
}
