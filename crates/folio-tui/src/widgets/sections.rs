//! Section blocks: headers, about, skills, timeline, projects, certs and
//! contact. Every block fades in through the reveal engine's alpha; hover
//! styles come from the pointer effects.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_core::portfolio::{Card, Cert, Contact, Project, SkillCategory, TimelineItem};

use crate::fx::pointer::{HoverTarget, Tilt};
use crate::layout::wrap_text;
use crate::theme::Theme;

use super::hero::fade;
use super::BuiltBlock;

/// Left margin for section content, keeps hit rects trivial
pub const MARGIN: u16 = 4;

pub fn section_header(title: &str, alpha: f64, theme: &Theme) -> BuiltBlock {
    let rule = "─".repeat(3);
    BuiltBlock::new(vec![
        Line::default(),
        Line::styled(
            format!("{rule}  {title}  {rule}"),
            Style::default()
                .fg(fade(theme, theme.fg0, alpha))
                .add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::default(),
    ])
}

pub fn about_text(lines: &[String], alpha: f64, theme: &Theme, width: u16) -> BuiltBlock {
    let budget = width.saturating_sub(MARGIN * 2).min(70);
    let style = Style::default().fg(fade(theme, theme.fg1, alpha));
    let mut out = Vec::new();
    for text in lines {
        for wrapped in wrap_text(text, budget) {
            out.push(indented(wrapped, style));
        }
    }
    out.push(Line::default());
    BuiltBlock::new(out)
}

pub fn highlight_card(card: &Card, alpha: f64, theme: &Theme, width: u16) -> BuiltBlock {
    let budget = width.saturating_sub(MARGIN * 2 + 2).min(66);
    let mut lines = vec![indented(
        format!("▪ {}", card.title),
        Style::default()
            .fg(fade(theme, theme.accent, alpha))
            .add_modifier(Modifier::BOLD),
    )];
    for wrapped in wrap_text(&card.body, budget) {
        lines.push(indented(
            format!("  {wrapped}"),
            Style::default().fg(fade(theme, theme.fg1, alpha)),
        ));
    }
    lines.push(Line::default());
    BuiltBlock::new(lines)
}

/// A skill category: name plus its row of hoverable tags.
pub fn skill_category(
    index: usize,
    category: &SkillCategory,
    alpha: f64,
    hover: Option<HoverTarget>,
    theme: &Theme,
) -> BuiltBlock {
    let mut block = BuiltBlock::new(vec![indented(
        category.name.clone(),
        Style::default()
            .fg(fade(theme, theme.fg0, alpha))
            .add_modifier(Modifier::BOLD),
    )]);

    let mut spans = vec![Span::raw(" ".repeat(MARGIN as usize + 2))];
    let mut col = MARGIN + 2;
    let tag_row = 1u16;
    for (tag_index, tag) in category.tags.iter().enumerate() {
        let label = format!("[{tag}]");
        let hovered = hover == Some(HoverTarget::SkillTag { category: index, tag: tag_index });
        // Hover swaps to an inverted, bold tag, the scale-up counterpart
        let style = if hovered {
            Style::default()
                .fg(theme.bg0)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fade(theme, theme.accent, alpha))
        };
        block.hits.push((
            col,
            tag_row,
            label.width() as u16,
            1,
            HoverTarget::SkillTag { category: index, tag: tag_index },
        ));
        spans.push(Span::styled(label.clone(), style));
        spans.push(Span::raw(" "));
        col += label.width() as u16 + 1;
    }
    block.lines.push(Line::from(spans));
    block.lines.push(Line::default());
    block
}

/// A timeline entry; hovering grows its marker.
pub fn timeline_item(
    index: usize,
    item: &TimelineItem,
    alpha: f64,
    hover: Option<HoverTarget>,
    theme: &Theme,
    width: u16,
) -> BuiltBlock {
    let hovered = hover == Some(HoverTarget::TimelineItem(index));
    let marker = if hovered { "◉" } else { "●" };
    let marker_style = if hovered {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(fade(theme, theme.accent, alpha))
    };

    let head_style = Style::default()
        .fg(fade(theme, theme.fg0, alpha))
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(fade(theme, theme.fg1, alpha));

    let mut block = BuiltBlock::new(vec![Line::from(vec![
        Span::raw(" ".repeat(MARGIN as usize)),
        Span::styled(marker.to_string(), marker_style),
        Span::raw(" "),
        Span::styled(item.period.clone(), dim_style),
        Span::raw("  "),
        Span::styled(item.role.clone(), head_style),
        Span::styled(format!(" · {}", item.org), dim_style),
    ])]);

    let budget = width.saturating_sub(MARGIN * 2 + 2).min(68);
    for wrapped in wrap_text(&item.summary, budget) {
        block.lines.push(indented(format!("  {wrapped}"), dim_style));
    }
    block.lines.push(Line::default());

    let height = block.lines.len() as u16;
    let hit_width = width.saturating_sub(MARGIN * 2);
    block.hits.push((MARGIN, 0, hit_width, height.saturating_sub(1), HoverTarget::TimelineItem(index)));
    block
}

/// A project card. Hover lifts it and leans the borders toward the pointer.
pub fn project_card(
    index: usize,
    project: &Project,
    alpha: f64,
    tilt: Option<Tilt>,
    theme: &Theme,
    width: u16,
) -> BuiltBlock {
    let card_width = width.saturating_sub(MARGIN * 2).min(64).max(24);
    let inner = card_width - 2;
    let lifted = tilt.is_some();
    let tilt = tilt.unwrap_or(Tilt::NEUTRAL);

    let border_color = if lifted { theme.accent } else { fade(theme, theme.fg1, alpha) };
    let border = Style::default().fg(border_color);

    // The lean: the edge the pointer is nearest renders heavy
    let top_heavy = tilt.rotate_x < 0.0;
    let bottom_heavy = tilt.rotate_x > 0.0;
    let left_heavy = tilt.rotate_y > 0.0;
    let right_heavy = tilt.rotate_y < 0.0;

    let h = |heavy: bool| if heavy { "━" } else { "─" };
    let v = |heavy: bool| if heavy { "┃" } else { "│" };

    let mut lines = Vec::new();
    lines.push(indented(
        format!("┌{}┐", h(top_heavy).repeat(inner as usize)),
        border,
    ));

    let push_row = |spans: Vec<Span<'static>>, lines: &mut Vec<Line<'static>>| {
        let used: u16 = spans.iter().map(|s| s.width() as u16).sum();
        let mut row = vec![
            Span::raw(" ".repeat(MARGIN as usize)),
            Span::styled(v(left_heavy).to_string(), border),
            Span::raw(" "),
        ];
        row.extend(spans);
        row.push(Span::raw(" ".repeat(inner.saturating_sub(used + 2) as usize)));
        row.push(Span::raw(" "));
        row.push(Span::styled(v(right_heavy).to_string(), border));
        lines.push(Line::from(row));
    };

    push_row(
        vec![Span::styled(
            project.name.clone(),
            Style::default()
                .fg(fade(theme, theme.accent, alpha))
                .add_modifier(Modifier::BOLD),
        )],
        &mut lines,
    );
    let body_style = Style::default().fg(fade(theme, theme.fg1, alpha));
    for wrapped in wrap_text(&project.blurb, inner.saturating_sub(2)) {
        push_row(vec![Span::styled(wrapped, body_style)], &mut lines);
    }
    if !project.tech.is_empty() {
        let tech = project
            .tech
            .iter()
            .map(|t| format!("[{t}]"))
            .collect::<Vec<_>>()
            .join(" ");
        push_row(
            vec![Span::styled(tech, Style::default().fg(fade(theme, theme.fg1, alpha)))],
            &mut lines,
        );
    }

    lines.push(indented(
        format!("└{}┘", h(bottom_heavy).repeat(inner as usize)),
        border,
    ));
    lines.push(Line::default());

    let height = lines.len() as u16;
    let mut block = BuiltBlock::new(lines);
    block.hits.push((MARGIN, 0, card_width, height.saturating_sub(1), HoverTarget::ProjectCard(index)));
    block
}

pub fn cert_card(cert: &Cert, alpha: f64, theme: &Theme) -> BuiltBlock {
    BuiltBlock::new(vec![
        Line::from(vec![
            Span::raw(" ".repeat(MARGIN as usize)),
            Span::styled("✦ ", Style::default().fg(fade(theme, theme.accent, alpha))),
            Span::styled(
                cert.name.clone(),
                Style::default()
                    .fg(fade(theme, theme.fg0, alpha))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" — {} ({})", cert.issuer, cert.year),
                Style::default().fg(fade(theme, theme.fg1, alpha)),
            ),
        ]),
        Line::default(),
    ])
}

pub fn contact_intro(lines: &[String], alpha: f64, theme: &Theme, width: u16) -> BuiltBlock {
    about_text(lines, alpha, theme, width)
}

/// The contact card. Its background is repainted with a radial glow around
/// the pointer by the page widget after composition.
pub fn contact_card(contact: &Contact, alpha: f64, theme: &Theme, width: u16) -> BuiltBlock {
    let card_width = width.saturating_sub(MARGIN * 2).min(50).max(24);
    let inner = card_width - 2;
    let border = Style::default().fg(fade(theme, theme.fg1, alpha));

    let mut lines = Vec::new();
    lines.push(indented(format!("┌{}┐", "─".repeat(inner as usize)), border));
    for link in &contact.links {
        let label = format!(" {:<8}", link.label);
        let used = label.width() + link.value.width();
        let pad = inner.saturating_sub(used as u16 + 1);
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(MARGIN as usize)),
            Span::styled("│".to_string(), border),
            Span::styled(
                label,
                Style::default()
                    .fg(fade(theme, theme.accent, alpha))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(link.value.clone(), Style::default().fg(fade(theme, theme.fg0, alpha))),
            Span::raw(" ".repeat(pad as usize + 1)),
            Span::styled("│".to_string(), border),
        ]));
    }
    lines.push(indented(format!("└{}┘", "─".repeat(inner as usize)), border));
    lines.push(Line::default());

    let height = lines.len() as u16;
    let mut block = BuiltBlock::new(lines);
    block.hits.push((MARGIN, 0, card_width, height.saturating_sub(1), HoverTarget::ContactCard));
    block
}

fn indented(text: impl Into<String>, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(" ".repeat(MARGIN as usize)),
        Span::styled(text.into(), style),
    ])
}
