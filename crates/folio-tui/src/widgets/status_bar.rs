use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let section = app
            .nav
            .active_section
            .and_then(|index| app.portfolio.section_titles().get(index).copied())
            .unwrap_or("Top");

        let max_scroll = app.doc.max_scroll(app.content_area.height).max(1);
        let percent = (app.scroll() as u32 * 100 / max_scroll as u32).min(100);

        let status_text = format!(" {} | {}%", section, percent);
        let help_hint = " q:quit j/k:scroll Tab:section gg/G:ends ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg1)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg1)),
            Span::styled(help_hint, Style::default().fg(theme.fg1).bg(theme.bg1)),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
