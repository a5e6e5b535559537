//! Full-screen TUI implementation for DigiGold.

pub mod anim;
pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod router;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};
use std::sync::Arc;

use anyhow::Result;
use digigold_core::auth::Authenticator;
use digigold_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the full-screen UI until the user quits.
///
/// `authenticator` supplies the real submission path; pass `None` for the
/// built-in demo flow. Submissions are spawned onto the ambient tokio
/// runtime, so this must be called from within a runtime context.
pub fn run(config: &Config, authenticator: Option<Arc<dyn Authenticator>>) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!("DigiGold requires a terminal to render its UI.");
    }

    let mut runtime = TuiRuntime::new(config.clone(), authenticator)?;
    runtime.run()?;

    Ok(())
}
