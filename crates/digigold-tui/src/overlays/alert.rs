//! Modal alert overlay: validation notices and submission results.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use super::OverlayTransition;
use crate::state::TuiState;

/// State for the alert overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub title: String,
    pub message: String,
}

impl AlertState {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayTransition {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => OverlayTransition::Close,
            _ => OverlayTransition::Stay,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let hints = [InputHint::new("Enter", "dismiss")];
        let body = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: &self.title,
                border_color: Color::Yellow,
                width: 46,
                height: 7,
                hints: &hints,
            },
        );

        let message = Paragraph::new(Line::from(Span::styled(
            self.message.clone(),
            Style::default().fg(Color::White),
        )))
        .wrap(Wrap { trim: true });
        frame.render_widget(message, body);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use digigold_core::config::Config;

    use super::*;
    use crate::overlays::OverlayTransition;
    use crate::state::AppState;

    /// Enter and Esc both dismiss; other keys keep the alert open.
    #[test]
    fn test_dismiss_keys() {
        let app = AppState::new(Config::default());
        let mut alert = AlertState::new("Validation", "Please enter your email");

        let transition = alert.handle_key(&app.tui, KeyEvent::from(KeyCode::Char('x')));
        assert_eq!(transition, OverlayTransition::Stay);

        let transition = alert.handle_key(&app.tui, KeyEvent::from(KeyCode::Enter));
        assert_eq!(transition, OverlayTransition::Close);

        let transition = alert.handle_key(&app.tui, KeyEvent::from(KeyCode::Esc));
        assert_eq!(transition, OverlayTransition::Close);
    }
}
