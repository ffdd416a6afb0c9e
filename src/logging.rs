use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::GeneralConfig;

const LOG_ENV: &str = "PORTFOLIO_LOG";

/// Where log records end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Configured log file, or nothing at all.
    FileOnly,
    /// Configured log file, or stderr.
    FileOrStderr,
}

fn filter(general: &GeneralConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&general.log_level))
}

/// Install the global subscriber. The full-screen UI passes `FileOnly` so
/// records never land on the screen it draws.
pub fn init(general: &GeneralConfig, target: LogTarget) -> Result<()> {
    if let Some(path) = &general.log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter(general))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;
        return Ok(());
    }

    if target == LogTarget::FileOrStderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter(general))
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;
    }

    Ok(())
}
