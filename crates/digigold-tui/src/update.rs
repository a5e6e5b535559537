//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. The reducer performs no I/O.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use digigold_core::config::Screen;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{login, onboard};
use crate::overlays::{OverlayRequest, OverlayTransition};
use crate::state::AppState;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick { now } => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            if app.tui.screen == Screen::Onboard {
                app.tui.onboard.tick(now);
            }
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::LoginResult { outcome } => {
            if let Some(request) = login::handle_login_result(&mut app.tui.login, outcome) {
                open_overlay(app, request);
            }
            vec![]
        }
        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tui.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                // Stale completion from a superseded task.
                vec![]
            }
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Global quit, available everywhere including over modals.
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c' | 'q'))
    {
        return vec![UiEffect::Quit];
    }

    // A modal overlay captures all remaining input while open.
    if let Some(overlay) = &mut app.overlay {
        match overlay.handle_key(&app.tui, key) {
            OverlayTransition::Stay => {}
            OverlayTransition::Close => app.overlay = None,
        }
        return vec![];
    }

    let (effects, overlay_request) = match app.tui.screen {
        Screen::Login => login::handle_key(&mut app.tui.login, &mut app.tui.task_seq, key),
        Screen::Onboard => onboard::handle_key(&mut app.tui.onboard, key),
    };
    if let Some(request) = overlay_request {
        open_overlay(app, request);
    }
    effects
}

fn open_overlay(app: &mut AppState, request: OverlayRequest) {
    app.overlay = Some(request.into_overlay());
}
