//! Overlays painted after everything else: the cursor trail particles and
//! the preloader screen. Both are optional and off by default.

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::theme::Theme;

pub struct OverlayWidget;

impl OverlayWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        draw_trail(frame, area, app);
        if let Some(ref preloader) = app.preloader {
            draw_preloader(frame, area, app, preloader, now);
        }
    }
}

/// Particles draw over the page, one glyph per particle sized by radius and
/// blended toward the background as it fades.
fn draw_trail(frame: &mut Frame, area: Rect, app: &App) {
    if !app.trail.is_enabled() || app.trail.is_empty() {
        return;
    }
    let buffer = frame.buffer_mut();
    for particle in app.trail.particles() {
        let col = particle.x.round() as i32;
        let row = particle.y.round() as i32;
        if col < area.x as i32
            || col >= area.right() as i32
            || row < area.y as i32
            || row >= area.bottom() as i32
        {
            continue;
        }
        let glyph = if particle.radius > 3.0 {
            "●"
        } else if particle.radius > 2.0 {
            "•"
        } else {
            "·"
        };
        let color = Theme::blend(app.theme.bg0, app.theme.accent, particle.alpha as f64);
        let cell = &mut buffer[(col as u16, row as u16)];
        cell.set_symbol(glyph);
        cell.set_fg(color);
    }
}

/// Full-screen loading panel: logo over a filling bar, fading out once full.
fn draw_preloader(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    preloader: &crate::fx::Preloader,
    now: Instant,
) {
    let theme = &app.theme;
    let opacity = preloader.opacity(now);

    frame.render_widget(Clear, area);

    let logo: String = app
        .portfolio
        .title
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();

    let bar_width = 24usize;
    let filled = (preloader.bar_progress(now) * bar_width as f64).round() as usize;
    let bar = format!(
        "{}{}",
        "━".repeat(filled),
        "─".repeat(bar_width - filled.min(bar_width))
    );

    let logo_color = Theme::blend(theme.bg0, theme.accent, opacity);
    let bar_color = Theme::blend(theme.bg0, theme.fg0, opacity);

    let top_pad = area.height.saturating_sub(4) / 2;
    let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::default()).collect();
    lines.push(
        Line::styled(
            logo,
            Style::default().fg(logo_color).add_modifier(Modifier::BOLD),
        )
        .centered(),
    );
    lines.push(Line::default());
    lines.push(Line::styled(bar, Style::default().fg(bar_color)).centered());

    let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.bg0));
    frame.render_widget(paragraph, area);
}
