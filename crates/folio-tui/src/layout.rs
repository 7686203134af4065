//! Document geometry.
//!
//! The portfolio renders as one tall column of blocks addressed by document
//! row. The page widget records every block's span while composing a frame;
//! the next update reads those spans for visibility triggers, the active nav
//! link and anchor targets, the same way the browser original read layout
//! after style.

use unicode_width::UnicodeWidthStr;

/// Identity of a composed block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    HeroHeading,
    HeroIntro,
    HeroStats,
    CodeWindow,
    SectionHeader(usize),
    AboutText,
    HighlightCard(usize),
    SkillCategory(usize),
    TimelineItem(usize),
    ProjectCard(usize),
    CertCard(usize),
    ContactIntro,
    ContactCard,
}

/// One block's position in the document
#[derive(Debug, Clone, Copy)]
pub struct BlockSpan {
    pub kind: BlockKind,
    /// First document row of the block
    pub top: u16,
    pub height: u16,
    /// Index into the reveal engine, for blocks that reveal on scroll
    pub reveal_index: Option<usize>,
    /// Stagger child index within the block's reveal group
    pub stagger_index: usize,
}

/// Geometry of the last composed frame
#[derive(Debug, Clone, Default)]
pub struct DocLayout {
    pub blocks: Vec<BlockSpan>,
    /// Per-section `(top, height)` spans in document rows
    pub sections: Vec<(u16, u16)>,
    pub total_height: u16,
    /// Number of reveal slots handed out
    pub reveal_count: usize,
}

impl DocLayout {
    /// Document row to scroll to for a section anchor
    pub fn anchor(&self, section: usize) -> Option<u16> {
        self.sections.get(section).map(|&(top, _)| top)
    }

    /// Span of the block running a given effect, if present
    pub fn find(&self, kind: BlockKind) -> Option<&BlockSpan> {
        self.blocks.iter().find(|b| b.kind == kind)
    }

    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.total_height.saturating_sub(viewport_height)
    }
}

/// Greedy word wrap to a column budget measured in display width.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_fits() {
        assert_eq!(wrap_text("short line", 40), vec!["short line"]);
    }

    #[test]
    fn test_wrap_splits_on_words() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_anchor_lookup() {
        let layout = DocLayout {
            sections: vec![(0, 50), (50, 80)],
            ..Default::default()
        };
        assert_eq!(layout.anchor(1), Some(50));
        assert_eq!(layout.anchor(9), None);
    }

    #[test]
    fn test_max_scroll_saturates() {
        let layout = DocLayout {
            total_height: 30,
            ..Default::default()
        };
        assert_eq!(layout.max_scroll(50), 0);
        assert_eq!(layout.max_scroll(10), 20);
    }
}
