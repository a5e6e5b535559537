//! Application state.
//!
//! Split-state layout: `TuiState` is the base screen state mutated by the
//! reducer, `overlay` is an optional modal that captures input while open.

use digigold_core::config::{Config, Screen};

use crate::common::{TaskSeq, Tasks};
use crate::features::login::LoginState;
use crate::features::onboard::OnboardState;
use crate::overlays::Overlay;

#[derive(Debug)]
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

#[derive(Debug)]
pub struct TuiState {
    pub should_quit: bool,
    /// Screen currently shown by the router.
    pub screen: Screen,
    pub onboard: OnboardState,
    pub login: LoginState,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    /// Frame counter driving the status-line spinner.
    pub spinner_frame: usize,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let screen = config.initial_screen;
        let onboard = OnboardState::new(config.onboarding.particles);
        Self {
            tui: TuiState {
                should_quit: false,
                screen,
                onboard,
                login: LoginState::default(),
                task_seq: TaskSeq::default(),
                tasks: Tasks::default(),
                spinner_frame: 0,
                config,
            },
            overlay: None,
        }
    }
}
