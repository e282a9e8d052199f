use crate::utils::paths::{ensure_app_dir_exists, get_log_path};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

/// Route `tracing` output to the log file in the app directory.
///
/// The terminal belongs to the TUI, so nothing is written to stdout or stderr.
pub fn init_file_logging() -> Result<()> {
    ensure_app_dir_exists()?;
    let log_path = get_log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))?;

    Ok(())
}
