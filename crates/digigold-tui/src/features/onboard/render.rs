//! Onboarding screen rendering.
//!
//! Maps the sampled animation values onto terminal cells: fade dims the
//! card colors, slide offsets the card vertically, scale widens the card
//! through the spring pop-in, and rotation picks the logo glyph.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{Cta, FEATURES, OnboardState};
use crate::anim::interpolate;

const BACKGROUND: Color = Color::Rgb(26, 26, 46);
const GOLD: Color = Color::Rgb(255, 215, 0);

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 18;

/// Quarter-turn glyphs for the rotating logo.
const LOGO_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Particle columns as a percentage of the width (20% + 15% per slot).
const PARTICLE_COLUMNS: [u16; 5] = [20, 35, 50, 65, 80];

/// Slide animation units per terminal row.
const SLIDE_UNITS_PER_ROW: f32 = 10.0;

pub fn render_onboard(frame: &mut Frame, state: &OnboardState, area: Rect) {
    frame.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), area);
    render_particles(frame, state, area);
    render_card(frame, state, area);
}

fn render_particles(frame: &mut Frame, state: &OnboardState, area: Rect) {
    if area.height == 0 {
        return;
    }
    for (index, progress) in state.values.particles.iter().enumerate() {
        if *progress <= f32::EPSILON {
            continue;
        }

        let column = PARTICLE_COLUMNS[index % PARTICLE_COLUMNS.len()];
        // Widen before multiplying: u16 overflows past ~820 columns.
        let x = area.x
            + (u32::from(area.width.saturating_sub(1)) * u32::from(column) / 100) as u16;

        // Rise from the bottom row to the top as progress goes 0→1.
        let bottom = f32::from(area.height.saturating_sub(1));
        let row = interpolate(*progress, &[(0.0, bottom), (1.0, 0.0)]);
        let y = area.y + row.round() as u16;
        if y >= area.y + area.height {
            continue;
        }

        // Grow to full size mid-rise, shrink away near the top.
        let size = interpolate(*progress, &[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]);
        let glyph = if size > 0.66 {
            "●"
        } else if size > 0.33 {
            "•"
        } else {
            "·"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(glyph, Style::default().fg(GOLD))),
            Rect::new(x, y, 1, 1),
        );
    }
}

fn render_card(frame: &mut Frame, state: &OnboardState, area: Rect) {
    let fade = state.values.fade;
    if fade <= f32::EPSILON {
        return;
    }

    let card = card_area(state, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(dim(GOLD, fade)));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let logo_index = (state.values.rotation_deg / 360.0 * LOGO_FRAMES.len() as f32) as usize;
    let logo = LOGO_FRAMES[logo_index % LOGO_FRAMES.len()];

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{logo} "), Style::default().fg(dim(GOLD, fade))),
            Span::styled(
                "₹ DigiGold",
                Style::default()
                    .fg(dim(GOLD, fade))
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Start your digital gold investment journey",
            Style::default().fg(dim(Color::Rgb(200, 200, 200), fade)),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "with complete security and transparency",
            Style::default().fg(dim(Color::Rgb(200, 200, 200), fade)),
        ))
        .alignment(Alignment::Center),
        Line::default(),
    ];

    for (icon, title, description) in FEATURES {
        lines.push(Line::from(vec![
            Span::raw(format!(" {icon} ")),
            Span::styled(
                title,
                Style::default()
                    .fg(dim(Color::White, fade))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {description}"),
            Style::default().fg(dim(Color::Rgb(160, 160, 160), fade)),
        )));
    }

    lines.push(Line::default());
    lines.push(
        Line::from(vec![
            cta_span("GET STARTED", state.focus == Cta::GetStarted, fade),
            Span::raw("  "),
            cta_span("LEARN MORE", state.focus == Cta::LearnMore, fade),
        ])
        .alignment(Alignment::Center),
    );
    lines.push(
        Line::from(vec![
            Span::styled("● ", Style::default().fg(dim(GOLD, fade))),
            Span::styled("○ ○", Style::default().fg(dim(Color::Rgb(120, 120, 120), fade))),
        ])
        .alignment(Alignment::Center),
    );

    frame.render_widget(Paragraph::new(lines), inner);
}

fn cta_span(label: &str, focused: bool, fade: f32) -> Span<'_> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(dim(GOLD, fade))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(dim(GOLD, fade))
    };
    Span::styled(format!("[ {label} ]"), style)
}

/// Card rectangle: centered, widened by the spring scale and pushed down
/// by the slide offset.
fn card_area(state: &OnboardState, area: Rect) -> Rect {
    let width = ((f32::from(CARD_WIDTH) * state.values.scale).round() as u16)
        .min(area.width.saturating_sub(2));
    let height = CARD_HEIGHT.min(area.height);

    let slide_rows = (state.values.slide / SLIDE_UNITS_PER_ROW).round() as u16;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let base_y = area.y + (area.height.saturating_sub(height)) / 2;
    let y = (base_y + slide_rows).min(area.y + area.height.saturating_sub(height));

    Rect::new(x, y, width, height)
}

/// Scales an RGB color toward the background by `fade` (0 = invisible,
/// 1 = full color). Non-RGB colors pass through once fade is past half.
fn dim(color: Color, fade: f32) -> Color {
    let fade = fade.clamp(0.0, 1.0);
    match (color, BACKGROUND) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
            blend(br, r, fade),
            blend(bg, g, fade),
            blend(bb, b, fade),
        ),
        _ if fade < 0.5 => Color::DarkGray,
        _ => color,
    }
}

fn blend(from: u8, to: u8, t: f32) -> u8 {
    (f32::from(from) + (f32::from(to) - f32::from(from)) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn state_at(elapsed: Duration) -> OnboardState {
        let mounted = Instant::now();
        let mut state = OnboardState::new(5);
        state.mount(mounted);
        state.tick(mounted + elapsed);
        state
    }

    /// The high-percentage particle columns (live from ~4s after mount)
    /// render on very wide terminals without overflowing the column
    /// arithmetic.
    #[test]
    fn test_particles_render_on_wide_terminal() {
        let state = state_at(Duration::from_secs(5));

        let backend = TestBackend::new(900, 50);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_onboard(frame, &state, frame.area()))
            .unwrap();
    }

    /// Same on a tiny area: nothing is drawn out of bounds.
    #[test]
    fn test_render_on_tiny_terminal() {
        let state = state_at(Duration::from_secs(5));

        let backend = TestBackend::new(4, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_onboard(frame, &state, frame.area()))
            .unwrap();
    }
}
