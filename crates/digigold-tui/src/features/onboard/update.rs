//! Key handling for the onboarding screen.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::state::{Cta, OnboardState};
use crate::effects::UiEffect;
use crate::overlays::OverlayRequest;

pub type KeyResult = (Vec<UiEffect>, Option<OverlayRequest>);

pub fn handle_key(state: &mut OnboardState, key: KeyEvent) -> KeyResult {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            state.focus_next();
            (vec![], None)
        }
        KeyCode::Enter => match state.focus {
            Cta::GetStarted => handle_get_started(),
            Cta::LearnMore => handle_learn_more(),
        },
        _ => (vec![], None),
    }
}

// Both buttons are intentionally inert: the follow-on flows live in the
// embedding application. Named so embedders have an obvious seam.

fn handle_get_started() -> KeyResult {
    debug!("get-started pressed");
    (vec![], None)
}

fn handle_learn_more() -> KeyResult {
    debug!("learn-more pressed");
    (vec![], None)
}
