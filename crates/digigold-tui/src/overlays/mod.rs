//! Modal overlays.
//!
//! Overlays temporarily take over keyboard input. Each overlay owns its
//! state, key handler, and render function; the reducer only routes keys
//! and applies the returned transition.

pub mod alert;
pub mod render_utils;

pub use alert::AlertState;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::state::TuiState;

/// Requests to open a new overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayRequest {
    Alert { title: String, message: String },
}

impl OverlayRequest {
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Alert {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn into_overlay(self) -> Overlay {
        match self {
            OverlayRequest::Alert { title, message } => {
                Overlay::Alert(AlertState::new(title, message))
            }
        }
    }
}

/// Transition returned by overlay key handlers.
#[derive(Debug, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

#[derive(Debug)]
pub enum Overlay {
    Alert(AlertState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Alert(a) => a.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayTransition {
        match self {
            Overlay::Alert(a) => a.handle_key(tui, key),
        }
    }
}

/// Extension trait for `Option<Overlay>` providing render helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(overlay) = self {
            overlay.render(frame, area);
        }
    }
}
