//! The scrollable page.
//!
//! Composes the whole document as one column of lines, records every block's
//! span for the next update's visibility and nav rules, then renders the
//! visible window. Decorative orbs go under the text, the contact glow over
//! its card.

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::fx::pointer::{card_tilt, glow_intensity, HoverTarget};
use crate::layout::{BlockKind, BlockSpan, DocLayout};
use crate::theme::Theme;

use super::{hero, sections, BuiltBlock};

pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
        app.content_area = area;
        let scroll = app.scroll();

        let (lines, layout, hits) = compose(app, area, scroll, now);
        app.doc = layout;
        app.hit_rects.extend(hits);

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(app.theme.bg0).fg(app.theme.fg0))
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);

        draw_orbs(frame, area, app, scroll);
        draw_glow(frame, area, app);
    }
}

/// Accumulates blocks into document lines and spans
struct Composer {
    lines: Vec<Line<'static>>,
    blocks: Vec<BlockSpan>,
    section_starts: Vec<u16>,
    reveal_count: usize,
    hits: Vec<(Rect, HoverTarget)>,
    area: Rect,
    scroll: u16,
}

impl Composer {
    fn begin_section(&mut self) {
        self.section_starts.push(self.lines.len() as u16);
    }

    /// Claim the next reveal slot; the same order every frame keeps indices
    /// stable across compositions.
    fn next_reveal(&mut self) -> usize {
        let index = self.reveal_count;
        self.reveal_count += 1;
        index
    }

    fn push(&mut self, kind: BlockKind, reveal_index: Option<usize>, stagger_index: usize, block: BuiltBlock) {
        let top = self.lines.len() as u16;
        let height = block.lines.len() as u16;

        // Translate block-relative hit rects to screen cells, clipped to the
        // visible window
        for (col, row, w, h, target) in block.hits {
            let doc_row = top + row;
            if doc_row < self.scroll {
                continue;
            }
            let screen_y = self.area.y + (doc_row - self.scroll);
            if screen_y >= self.area.bottom() {
                continue;
            }
            let h = h.min(self.area.bottom().saturating_sub(screen_y));
            self.hits
                .push((Rect::new(self.area.x + col, screen_y, w, h.max(1)), target));
        }

        self.lines.extend(block.lines);
        self.blocks.push(BlockSpan {
            kind,
            top,
            height,
            reveal_index,
            stagger_index,
        });
    }

    fn finish(self) -> (Vec<Line<'static>>, DocLayout, Vec<(Rect, HoverTarget)>) {
        let total_height = self.lines.len() as u16;
        let mut sections = Vec::with_capacity(self.section_starts.len());
        for (index, &start) in self.section_starts.iter().enumerate() {
            let end = self
                .section_starts
                .get(index + 1)
                .copied()
                .unwrap_or(total_height);
            sections.push((start, end.saturating_sub(start)));
        }
        (
            self.lines,
            DocLayout {
                blocks: self.blocks,
                sections,
                total_height,
                reveal_count: self.reveal_count,
            },
            self.hits,
        )
    }
}

fn compose(
    app: &App,
    area: Rect,
    scroll: u16,
    now: Instant,
) -> (Vec<Line<'static>>, DocLayout, Vec<(Rect, HoverTarget)>) {
    let width = area.width;
    let titles = app.portfolio.section_titles();
    let mut c = Composer {
        lines: Vec::new(),
        blocks: Vec::new(),
        section_starts: Vec::new(),
        reveal_count: 0,
        hits: Vec::new(),
        area,
        scroll,
    };

    // Hero: no reveal, its pieces fade on load and run their own effects
    c.begin_section();
    c.push(BlockKind::HeroHeading, None, 0, hero::heading(app, now, width));
    c.push(BlockKind::HeroIntro, None, 0, hero::intro(app, now, width));
    if !app.portfolio.hero.stats.is_empty() {
        c.push(BlockKind::HeroStats, None, 0, hero::stats(app, now, width));
    }
    if !app.portfolio.hero.code_sample.is_empty() {
        c.push(BlockKind::CodeWindow, None, 0, hero::code_window(app, width));
    }

    let alpha = |c: &mut Composer, stagger: usize| -> (usize, f64) {
        let index = c.next_reveal();
        (index, app.reveal.alpha(index, stagger, now))
    };

    // About
    c.begin_section();
    {
        let (ri, a) = alpha(&mut c, 0);
        c.push(BlockKind::SectionHeader(1), Some(ri), 0, sections::section_header(titles[1], a, &app.theme));
        let (ri, a) = alpha(&mut c, 0);
        c.push(BlockKind::AboutText, Some(ri), 0, sections::about_text(&app.portfolio.about.lines, a, &app.theme, width));
        for (i, card) in app.portfolio.about.highlights.iter().enumerate() {
            let (ri, a) = alpha(&mut c, i);
            c.push(BlockKind::HighlightCard(i), Some(ri), i, sections::highlight_card(card, a, &app.theme, width));
        }
    }

    // Skills
    c.begin_section();
    {
        let (ri, a) = alpha(&mut c, 0);
        c.push(BlockKind::SectionHeader(2), Some(ri), 0, sections::section_header(titles[2], a, &app.theme));
        for (i, category) in app.portfolio.skills.iter().enumerate() {
            let (ri, a) = alpha(&mut c, i);
            c.push(
                BlockKind::SkillCategory(i),
                Some(ri),
                i,
                sections::skill_category(i, category, a, app.hover, &app.theme),
            );
        }
    }

    // Timeline
    c.begin_section();
    {
        let (ri, a) = alpha(&mut c, 0);
        c.push(BlockKind::SectionHeader(3), Some(ri), 0, sections::section_header(titles[3], a, &app.theme));
        for (i, item) in app.portfolio.timeline.iter().enumerate() {
            let (ri, a) = alpha(&mut c, i);
            c.push(
                BlockKind::TimelineItem(i),
                Some(ri),
                i,
                sections::timeline_item(i, item, a, app.hover, &app.theme, width),
            );
        }
    }

    // Projects
    c.begin_section();
    {
        let (ri, a) = alpha(&mut c, 0);
        c.push(BlockKind::SectionHeader(4), Some(ri), 0, sections::section_header(titles[4], a, &app.theme));
        for (i, project) in app.portfolio.projects.iter().enumerate() {
            let (ri, a) = alpha(&mut c, 0);
            // Tilt only applies to the card under the pointer
            let tilt = match (app.hover, app.pointer, app.hover_rect) {
                (Some(HoverTarget::ProjectCard(h)), Some(pointer), Some(rect)) if h == i => {
                    Some(card_tilt(pointer, rect))
                }
                _ => None,
            };
            c.push(
                BlockKind::ProjectCard(i),
                Some(ri),
                0,
                sections::project_card(i, project, a, tilt, &app.theme, width),
            );
        }
    }

    // Certs
    c.begin_section();
    {
        let (ri, a) = alpha(&mut c, 0);
        c.push(BlockKind::SectionHeader(5), Some(ri), 0, sections::section_header(titles[5], a, &app.theme));
        for (i, cert) in app.portfolio.certs.iter().enumerate() {
            let (ri, a) = alpha(&mut c, i);
            c.push(BlockKind::CertCard(i), Some(ri), i, sections::cert_card(cert, a, &app.theme));
        }
    }

    // Contact
    c.begin_section();
    {
        let (ri, a) = alpha(&mut c, 0);
        c.push(BlockKind::SectionHeader(6), Some(ri), 0, sections::section_header(titles[6], a, &app.theme));
        let (ri, a) = alpha(&mut c, 0);
        c.push(BlockKind::ContactIntro, Some(ri), 0, sections::contact_intro(&app.portfolio.contact.lines, a, &app.theme, width));
        let (ri, a) = alpha(&mut c, 0);
        c.push(
            BlockKind::ContactCard,
            Some(ri),
            0,
            sections::contact_card(&app.portfolio.contact, a, &app.theme, width),
        );
    }

    // Tail room so the last section can become active
    c.lines.push(Line::default());
    c.lines.push(Line::default());

    c.finish()
}

/// Paint the decorative orbs into empty background cells, offset by the
/// pointer parallax.
fn draw_orbs(frame: &mut Frame, area: Rect, app: &App, scroll: u16) {
    if !app.config.effects.parallax {
        return;
    }
    let buffer = frame.buffer_mut();
    for (index, orb) in app.orbs.iter().enumerate() {
        let (dx, dy) = app.orb_offsets.get(index).copied().unwrap_or((0.0, 0.0));
        let color = match orb.palette {
            0 => app.theme.orb_a,
            1 => app.theme.orb_b,
            _ => app.theme.orb_c,
        };
        // Soft glyph disc around the anchor
        let anchor_col = orb.col as f32 + dx;
        let anchor_row = orb.row as f32 + dy - scroll as f32;
        let radius = orb.size as f32;
        let soft = Theme::blend(app.theme.bg0, color, 0.45);

        let row_span = (radius / 2.0).ceil() as i32;
        for row_offset in -row_span..=row_span {
            for col_offset in -(radius as i32)..=(radius as i32) {
                let distance = ((col_offset * col_offset) as f32
                    + (row_offset * row_offset * 4) as f32)
                    .sqrt();
                if distance > radius {
                    continue;
                }
                let col = anchor_col.round() as i32 + col_offset;
                let row = anchor_row.round() as i32 + row_offset;
                if col < area.x as i32
                    || col >= area.right() as i32
                    || row < area.y as i32
                    || row >= area.bottom() as i32
                {
                    continue;
                }
                let cell = &mut buffer[(col as u16, row as u16)];
                // Stay under the text: only blank cells take the orb
                if cell.symbol() == " " {
                    cell.set_symbol(if distance < radius * 0.6 { "▒" } else { "░" });
                    cell.set_fg(soft);
                }
            }
        }
    }
}

/// Repaint the contact card's background as a radial glow around the
/// pointer; a flat panel fill when the pointer is elsewhere.
fn draw_glow(frame: &mut Frame, area: Rect, app: &App) {
    if !app.config.effects.hover {
        return;
    }
    let Some(&(card, _)) = app
        .hit_rects
        .iter()
        .find(|(_, target)| *target == HoverTarget::ContactCard)
    else {
        return;
    };
    let card = card.intersection(area);
    if card.is_empty() {
        return;
    }

    let glowing = app.hover == Some(HoverTarget::ContactCard);
    let pointer = app.pointer.unwrap_or((0, 0));
    let buffer = frame.buffer_mut();
    for row in card.top()..card.bottom() {
        for col in card.left()..card.right() {
            let bg = if glowing {
                let intensity = glow_intensity((col, row), pointer, 18.0);
                Theme::blend(app.theme.bg1, app.theme.glow, intensity as f64)
            } else {
                app.theme.bg1
            };
            buffer[(col, row)].set_bg(bg);
        }
    }
}
