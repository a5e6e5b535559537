//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui frame, and never
//! mutate state or return effects.

use digigold_core::config::Screen;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::{login, onboard};
use crate::overlays::OverlayExt;
use crate::state::{AppState, TuiState};

/// Height of the status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let body_height = area.height.saturating_sub(STATUS_HEIGHT);
    let body = Rect::new(area.x, area.y, area.width, body_height);
    let status = Rect::new(
        area.x,
        area.y + body_height,
        area.width,
        area.height - body_height,
    );

    match app.tui.screen {
        Screen::Onboard => onboard::render_onboard(frame, &app.tui.onboard, body),
        Screen::Login => {
            login::render_login(frame, &app.tui.login, app.tui.spinner_frame, body);
        }
    }

    render_status_line(&app.tui, frame, status);
    app.overlay.render(frame, area);
}

fn render_status_line(state: &TuiState, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }

    let hints = match state.screen {
        Screen::Login if state.login.is_submitting() => "Signing in...",
        Screen::Login => "Tab field • Enter sign in • Ctrl+R reveal • Ctrl+C quit",
        Screen::Onboard => "Tab button • Enter select • Ctrl+C quit",
    };

    let line = Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(line), area);
}
