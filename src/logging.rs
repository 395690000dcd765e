//! Tracing subscriber setup.
//!
//! The interactive TUI owns stdout/stderr, so it logs to a file. Headless
//! subcommands log to stderr. `RUST_LOG` overrides the default filter in both
//! cases.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "salontui=debug"
    } else {
        "salontui=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)))
}

/// Default log file for interactive mode
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("salontui.log")
}

/// Log to `path` (appending) for the lifetime of the process.
pub fn init_file_logger(path: &Path, verbose: bool) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false),
        )
        .try_init()
        .context("Failed to install file logger")?;

    Ok(())
}

/// Log compactly to stderr, for headless subcommands.
pub fn init_stderr_logger(verbose: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .context("Failed to install stderr logger")?;

    Ok(())
}
