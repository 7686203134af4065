//! Hero blocks: heading, intro with the magnetic buttons, the stat
//! counters and the typed code window.

use std::time::Instant;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_core::markup::{strip_tags, tokenize, Token};

use crate::app::App;
use crate::fx::pointer::{magnetic_offset, HoverTarget};
use crate::theme::Theme;

use super::BuiltBlock;

pub fn heading(app: &App, now: Instant, _width: u16) -> BuiltBlock {
    let theme = &app.theme;
    let hero = &app.portfolio.hero;

    let mut lines = vec![Line::default()];
    lines.push(
        Line::styled(
            hero.heading.clone(),
            Style::default()
                .fg(fade(theme, theme.fg0, app.intro.alpha(0, now)))
                .add_modifier(Modifier::BOLD),
        )
        .centered(),
    );
    lines.push(
        Line::styled(
            hero.subheading.clone(),
            Style::default().fg(fade(theme, theme.accent, app.intro.alpha(1, now))),
        )
        .centered(),
    );
    lines.push(
        Line::styled(
            app.portfolio.tagline.clone(),
            Style::default().fg(fade(theme, theme.fg1, app.intro.alpha(2, now))),
        )
        .centered(),
    );
    lines.push(Line::default());
    BuiltBlock::new(lines)
}

/// Intro lines plus the two anchor buttons. The buttons shift toward the
/// pointer by a tenth of its offset from their center.
pub fn intro(app: &App, now: Instant, width: u16) -> BuiltBlock {
    let theme = &app.theme;
    let hero = &app.portfolio.hero;
    let mut block = BuiltBlock::new(Vec::new());

    for (index, text) in hero.intro_lines.iter().enumerate() {
        let alpha = app.intro.alpha(3 + index, now);
        block.lines.push(
            Line::styled(text.clone(), Style::default().fg(fade(theme, theme.fg1, alpha)))
                .centered(),
        );
    }
    block.lines.push(Line::default());

    // Buttons centered manually so their hit rects are known
    let labels = ["[ View Projects ]", "[ Get in Touch ]"];
    let gap = 3u16;
    let total: u16 = labels.iter().map(|l| l.width() as u16).sum::<u16>() + gap;
    let start = width.saturating_sub(total) / 2;
    let button_row = block.lines.len() as u16;
    let button_alpha = app.intro.alpha(3 + hero.intro_lines.len(), now);

    let mut spans = vec![Span::raw(" ".repeat(start as usize))];
    let mut col = start;
    for (index, label) in labels.iter().enumerate() {
        let hovered = app.hover == Some(HoverTarget::HeroButton(index));
        // Magnetic pull: nudge the label inside a fixed-width slot
        let (dx, _) = match (hovered, app.pointer) {
            (true, Some(pointer)) => {
                let rect = ratatui::layout::Rect::new(
                    app.content_area.x + col,
                    0,
                    label.width() as u16,
                    1,
                );
                magnetic_offset((pointer.0, 0), rect)
            }
            _ => (0, 0),
        };

        let style = if hovered {
            Style::default()
                .fg(theme.bg0)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(fade(theme, theme.accent, button_alpha))
                .add_modifier(Modifier::BOLD)
        };

        let shifted = shift_label(label, dx);
        block.hits.push((col, button_row, label.width() as u16, 1, HoverTarget::HeroButton(index)));
        spans.push(Span::styled(shifted, style));
        col += label.width() as u16;
        if index + 1 < labels.len() {
            spans.push(Span::raw(" ".repeat(gap as usize)));
            col += gap;
        }
    }
    block.lines.push(Line::from(spans));
    block.lines.push(Line::default());
    block
}

/// Nudge a fixed-width label left or right within its slot
fn shift_label(label: &str, dx: i16) -> String {
    match dx {
        0 => label.to_string(),
        d if d > 0 => {
            let pad = " ".repeat(d as usize);
            let kept: String = label.chars().take(label.chars().count() - d as usize).collect();
            format!("{pad}{kept}")
        }
        d => {
            let cut = (-d) as usize;
            let kept: String = label.chars().skip(cut).collect();
            let pad = " ".repeat(cut);
            format!("{kept}{pad}")
        }
    }
}

/// The stat counters: a row of animated values over their labels.
pub fn stats(app: &App, now: Instant, _width: u16) -> BuiltBlock {
    let theme = &app.theme;
    let stats = &app.portfolio.hero.stats;

    let mut value_spans = Vec::new();
    let mut label_spans = Vec::new();
    for (index, stat) in stats.iter().enumerate() {
        let value = app
            .counters
            .get(index)
            .map(|c| c.display(now))
            .unwrap_or_default();
        // Pad both rows to the wider of value/label so columns line up
        let cell = stat.label.width().max(value.width());
        value_spans.push(Span::styled(
            format!("{:^cell$}", value),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        label_spans.push(Span::styled(
            format!("{:^cell$}", stat.label),
            Style::default().fg(theme.fg1),
        ));
        if index + 1 < stats.len() {
            value_spans.push(Span::raw("    "));
            label_spans.push(Span::raw("    "));
        }
    }

    BuiltBlock::new(vec![
        Line::default(),
        Line::from(value_spans).centered(),
        Line::from(label_spans).centered(),
        Line::default(),
    ])
}

/// The code window, typed out by the typewriter effect.
///
/// Height is reserved for the full sample up front so playback never
/// reflows the document.
pub fn code_window(app: &App, width: u16) -> BuiltBlock {
    let theme = &app.theme;
    let source = &app.portfolio.hero.code_sample;

    let inner_width = width.saturating_sub(8).min(58).max(20);
    let total_lines = strip_tags(source).lines().count().max(1);

    let border_style = Style::default().fg(theme.fg1);
    let mut lines = Vec::with_capacity(total_lines + 3);
    // Same display width as the content rows: inner_width + 4
    lines.push(
        Line::styled(
            format!("╭─ ~/ship.rs {}╮", "─".repeat(inner_width.saturating_sub(10) as usize)),
            border_style,
        )
        .centered(),
    );

    let mut content = styled_code_lines(app.typewriter.rendered(), theme);
    if app.typewriter.is_playing() {
        // Block cursor rides the last typed character
        if let Some(last) = content.last_mut() {
            last.push_span(Span::styled("▌", Style::default().fg(theme.accent)));
        }
    }
    content.resize_with(total_lines, Line::default);

    for line in content {
        let mut spans = vec![Span::styled("│ ", border_style)];
        let used: u16 = line.width() as u16;
        spans.extend(line.spans);
        spans.push(Span::raw(
            " ".repeat(inner_width.saturating_sub(used) as usize),
        ));
        spans.push(Span::styled(" │", border_style));
        lines.push(Line::from(spans).centered());
    }

    lines.push(
        Line::styled(
            format!("╰{}╯", "─".repeat(inner_width as usize + 2)),
            border_style,
        )
        .centered(),
    );
    lines.push(Line::default());
    BuiltBlock::new(lines)
}

/// Turn (possibly partially typed) markup into styled lines.
///
/// Tags push and pop a style; because the typewriter commits tags whole the
/// input is always balanced and the stack never sees a half-open tag.
fn styled_code_lines(markup: &str, theme: &Theme) -> Vec<Line<'static>> {
    let base = Style::default().fg(theme.fg0);
    let mut style_stack = vec![base];
    let mut lines = vec![Line::default()];

    for token in tokenize(markup) {
        match token {
            Token::Tag(tag) => {
                if tag.starts_with("</") {
                    if style_stack.len() > 1 {
                        style_stack.pop();
                    }
                } else {
                    let name = tag.trim_matches(|c| c == '<' || c == '>');
                    style_stack.push(tag_style(name, theme, base));
                }
            }
            Token::Text(text) => {
                let style = *style_stack.last().unwrap_or(&base);
                let mut first = true;
                for piece in text.split('\n') {
                    if !first {
                        lines.push(Line::default());
                    }
                    first = false;
                    if !piece.is_empty() {
                        if let Some(last) = lines.last_mut() {
                            last.push_span(Span::styled(piece.to_string(), style));
                        }
                    }
                }
            }
        }
    }
    lines
}

fn tag_style(name: &str, theme: &Theme, base: Style) -> Style {
    match name {
        "kw" => Style::default().fg(theme.code_kw),
        "str" => Style::default().fg(theme.code_str),
        "fn" => Style::default().fg(theme.code_fn),
        "cmt" => Style::default().fg(theme.code_cmt).add_modifier(Modifier::ITALIC),
        _ => base,
    }
}

pub(super) fn fade(theme: &Theme, color: ratatui::style::Color, alpha: f64) -> ratatui::style::Color {
    Theme::blend(theme.bg0, color, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_label() {
        assert_eq!(shift_label("[ Go ]", 0), "[ Go ]");
        assert_eq!(shift_label("[ Go ]", 1), " [ Go ");
        assert_eq!(shift_label("[ Go ]", -1), " Go ] ");
    }

    #[test]
    fn test_styled_code_lines_splits_on_newline() {
        let theme = Theme::default();
        let lines = styled_code_lines("<kw>fn</kw> a\nb", &theme);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].width(), 4); // "fn a"
        assert_eq!(lines[1].width(), 1); // "b"
    }

    #[test]
    fn test_styled_code_lines_partial_markup() {
        // Mid-playback output is balanced but may have open styles
        let theme = Theme::default();
        let lines = styled_code_lines("<kw>fn</kw> <fn>shi", &theme);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].width(), 6); // "fn shi"
    }
}
