//! The navigation bar.
//!
//! One row of section links. Scrolling past a small offset gives the bar a
//! shadow (a filled background here); scrolling down past the hide
//! threshold slides it away entirely, in which case the run loop hands its
//! row back to the page.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::fx::pointer::HoverTarget;

pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        if area.height == 0 {
            return;
        }
        let theme = &app.theme;

        // Shadow state swaps the flat background for a raised one
        let bar_bg = if app.nav.shadow { theme.bg1 } else { theme.bg0 };
        let base = Style::default().bg(bar_bg);

        let brand = format!(" ◆ {} ", app.portfolio.title);
        let mut spans = vec![Span::styled(
            brand.clone(),
            base.fg(theme.accent).add_modifier(Modifier::BOLD),
        )];
        let mut col = area.x + brand.width() as u16;

        for (index, title) in app.portfolio.section_titles().iter().enumerate() {
            let label = format!(" {title} ");
            let active = app.nav.active_section == Some(index);
            let hovered = app.hover == Some(HoverTarget::NavLink(index));

            let style = if active {
                base.fg(theme.accent).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else if hovered {
                base.fg(theme.fg0).add_modifier(Modifier::BOLD)
            } else {
                base.fg(theme.fg1)
            };

            app.hit_rects.push((
                Rect::new(col, area.y, label.width() as u16, 1),
                HoverTarget::NavLink(index),
            ));
            spans.push(Span::styled(label.clone(), style));
            col += label.width() as u16;
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(base);
        frame.render_widget(paragraph, area);
    }
}
