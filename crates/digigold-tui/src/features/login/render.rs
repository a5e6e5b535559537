//! Login screen rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{Field, LoginState};
use crate::common::truncate_with_ellipsis;

const GOLD: Color = Color::Rgb(255, 215, 0);
const BACKGROUND: Color = Color::Rgb(26, 26, 46);

const CARD_WIDTH: u16 = 46;
const CARD_HEIGHT: u16 = 12;

/// Spinner frames for the in-flight submission indicator.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

pub fn render_login(frame: &mut Frame, state: &LoginState, spinner_frame: usize, area: Rect) {
    frame.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), area);

    let card = centered_card(area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GOLD))
        .title(" DigiGold ")
        .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut lines = vec![
        Line::from(Span::styled(
            "Welcome Back",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::default(),
    ];

    lines.push(field_line(
        "Email",
        &state.email,
        state.focus == Field::Email,
        state.is_submitting(),
        inner.width,
    ));
    lines.push(Line::default());

    let password_display = if state.show_password {
        state.password.clone()
    } else {
        "•".repeat(state.password.chars().count())
    };
    lines.push(field_line(
        "Password",
        &password_display,
        state.focus == Field::Password,
        state.is_submitting(),
        inner.width,
    ));
    lines.push(Line::default());

    if state.is_submitting() {
        let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        lines.push(
            Line::from(Span::styled(
                format!("{spinner} Signing in..."),
                Style::default().fg(GOLD),
            ))
            .alignment(Alignment::Center),
        );
    } else {
        lines.push(
            Line::from(Span::styled(
                "[ Sign In ]",
                Style::default()
                    .fg(Color::Black)
                    .bg(GOLD)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
    }
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "Ctrl+F forgot password • Ctrl+S sign up",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    );

    frame.render_widget(Paragraph::new(lines), inner);
}

/// One labelled input row: "Label  value█", gold when focused.
fn field_line<'a>(
    label: &'a str,
    value: &str,
    focused: bool,
    submitting: bool,
    width: u16,
) -> Line<'a> {
    let label_color = if focused { GOLD } else { Color::Gray };
    let text_color = if focused { Color::White } else { Color::Gray };

    let max_value_width = (width as usize).saturating_sub(label.len() + 4);
    let display = truncate_with_ellipsis(value, max_value_width);

    let mut spans = vec![
        Span::styled(format!("{label}: "), Style::default().fg(label_color)),
        Span::styled(display, Style::default().fg(text_color)),
    ];
    if focused && !submitting {
        spans.push(Span::styled("█", Style::default().fg(GOLD)));
    }
    Line::from(spans)
}

fn centered_card(area: Rect) -> Rect {
    let width = CARD_WIDTH.min(area.width.saturating_sub(2));
    let height = CARD_HEIGHT.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
