//! Screen router.
//!
//! The navigable screens are a closed set (`Screen` in the core config
//! crate); exactly one is active at a time and no parameters flow between
//! them. Switching screens runs the target's mount hook.

use std::time::Instant;

use digigold_core::config::Screen;

use crate::state::TuiState;

/// Makes `screen` the active screen.
///
/// Activating the screen that is already showing remounts it: the
/// onboarding choreography restarts from zero.
pub fn activate(state: &mut TuiState, screen: Screen, now: Instant) {
    state.screen = screen;
    if screen == Screen::Onboard {
        state.onboard.mount(now);
    }
}
