//! Terminal lifecycle management.
//!
//! Handles terminal setup, restore, and the panic hook. Terminal state is
//! restored on normal exit (via Drop on the runtime) and on panic.

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Sets up the terminal: raw mode, alternate screen, backend.
///
/// Call `install_panic_hook()` before this so a panic mid-setup still
/// restores the terminal.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Enables bracketed paste for the event loop.
///
/// Kept separate from `setup_terminal()` so normal exit paths can disable
/// it before `restore_terminal()`; restore also disables it to cover the
/// panic path.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn enable_input_features() -> Result<()> {
    execute!(io::stdout(), EnableBracketedPaste).context("Failed to enable input features")?;
    Ok(())
}

/// Disables features enabled by `enable_input_features()`.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn disable_input_features() -> Result<()> {
    execute!(io::stdout(), DisableBracketedPaste).context("Failed to disable input features")?;
    Ok(())
}

/// Restores terminal state. Idempotent; safe to call multiple times.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn restore_terminal() -> Result<()> {
    // Bracketed paste must be disabled before leaving raw mode.
    let _ = execute!(io::stdout(), DisableBracketedPaste);

    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the
/// panic. Call this BEFORE `setup_terminal()`.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    // Terminal tests need a real TTY, so the guarantees are checked manually:
    // - Terminal is restored on normal exit (via Drop)
    // - Terminal is restored on panic
    // - Bracketed paste is disabled on all exit paths
}
