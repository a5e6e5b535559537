//! Logging initialization.
//!
//! The TUI owns the terminal, so logs go to a rolling file under the
//! DigiGold home directory instead of stdout/stderr. Filtering comes from
//! the DIGIGOLD_LOG environment variable, defaulting to `digigold=info`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Environment variable controlling the log filter.
pub const LOG_FILTER_ENV: &str = "DIGIGOLD_LOG";

const DEFAULT_FILTER: &str = "digigold=info";

/// Initializes file logging under the default logs directory.
///
/// Returns the appender guard; the caller must keep it alive for the
/// lifetime of the process or buffered log lines are dropped.
pub fn init() -> Result<WorkerGuard> {
    init_at(&paths::logs_dir())
}

/// Initializes file logging under a specific directory.
pub fn init_at(logs_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let env_filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let appender = tracing_appender::rolling::daily(logs_dir, "digigold.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .ok(); // Already-initialized is fine (tests, embedding)

    Ok(guard)
}
