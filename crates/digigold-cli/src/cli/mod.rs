//! Command-line entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use digigold_core::config::{Config, Screen};
use digigold_core::logging;

#[derive(Parser, Debug)]
#[command(name = "digigold", version, about = "Digital gold investment terminal app")]
pub struct Cli {
    /// Screen to show at startup: "onboard" or "login" (overrides the
    /// config file).
    #[arg(long, value_parser = Screen::parse)]
    screen: Option<Screen>,

    /// Path to an alternate config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(screen) = cli.screen {
        config.initial_screen = screen;
    }

    // Keep the guard alive so buffered log lines flush on exit.
    let _log_guard = logging::init().context("Failed to initialize logging")?;
    tracing::info!(
        screen = config.initial_screen.display_name(),
        "starting digigold"
    );

    // The event loop blocks this thread; the runtime's workers drive the
    // spawned submission tasks.
    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
    let _runtime_guard = runtime.enter();
    digigold_tui::run(&config, None)
}
