//! Navigation bar behavior.
//!
//! Three independent rules, each reading the scroll offset fresh:
//! a shadow once the page is scrolled past a small threshold, hide-on-
//! scroll-down past a larger threshold (restored by any upward movement),
//! and an active-link highlight for the section containing the offset.

use folio_core::MotionConfig;

/// Scroll-derived nav bar state
#[derive(Debug, Clone, Default)]
pub struct NavState {
    last_scroll: u16,
    /// Drop shadow under the bar
    pub shadow: bool,
    /// Bar slid out of view
    pub hidden: bool,
    /// Index of the section owning the active link
    pub active_section: Option<usize>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the scroll rules for a new offset.
    ///
    /// `sections` are `(top, height)` spans in document rows.
    pub fn on_scroll(&mut self, current: u16, sections: &[(u16, u16)], config: &MotionConfig) {
        // Shadow once past the threshold
        self.shadow = current > config.nav_shadow_after;

        // Hide when moving down past the threshold, show on any upward move
        if current > self.last_scroll && current > config.nav_hide_after {
            self.hidden = true;
        } else {
            self.hidden = false;
        }

        self.last_scroll = current;

        self.active_section = active_section(current, sections, config.section_lookahead);
    }
}

/// The section whose look-ahead-adjusted span contains the offset.
///
/// A section owns `[top - lookahead, top - lookahead + height)`; scanning in
/// document order and keeping the last match gives exactly one winner, the
/// same way the original cleared the highlight from every other link.
fn active_section(scroll: u16, sections: &[(u16, u16)], lookahead: u16) -> Option<usize> {
    let scroll = scroll as i64;
    let lookahead = lookahead as i64;
    let mut active = None;
    for (index, &(top, height)) in sections.iter().enumerate() {
        let adjusted_top = top as i64 - lookahead;
        if scroll >= adjusted_top && scroll < adjusted_top + height as i64 {
            active = Some(index);
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MotionConfig {
        MotionConfig {
            nav_shadow_after: 50,
            nav_hide_after: 200,
            section_lookahead: 8,
            ..Default::default()
        }
    }

    const SECTIONS: [(u16, u16); 3] = [(0, 100), (100, 150), (250, 120)];

    #[test]
    fn test_shadow_threshold() {
        let mut nav = NavState::new();
        nav.on_scroll(50, &SECTIONS, &config());
        assert!(!nav.shadow);
        nav.on_scroll(51, &SECTIONS, &config());
        assert!(nav.shadow);
        nav.on_scroll(10, &SECTIONS, &config());
        assert!(!nav.shadow);
    }

    #[test]
    fn test_hide_on_scroll_down_past_threshold() {
        let mut nav = NavState::new();
        nav.on_scroll(150, &SECTIONS, &config());
        assert!(!nav.hidden, "below hide threshold");

        // Scrolling down past 200 hides the bar
        nav.on_scroll(210, &SECTIONS, &config());
        assert!(nav.hidden);

        // Any upward movement restores it, regardless of position
        nav.on_scroll(205, &SECTIONS, &config());
        assert!(!nav.hidden);

        // Down again re-hides
        nav.on_scroll(260, &SECTIONS, &config());
        assert!(nav.hidden);
    }

    #[test]
    fn test_deep_scroll_up_stays_visible() {
        let mut nav = NavState::new();
        nav.on_scroll(400, &SECTIONS, &config());
        assert!(nav.hidden);
        // Scrolling up far past the threshold keeps the bar visible
        nav.on_scroll(300, &SECTIONS, &config());
        assert!(!nav.hidden);
    }

    #[test]
    fn test_active_section_exactly_one() {
        let cfg = config();
        let mut nav = NavState::new();

        nav.on_scroll(0, &SECTIONS, &cfg);
        assert_eq!(nav.active_section, Some(0));

        // Lookahead shifts the handoff 8 rows before the section top
        nav.on_scroll(91, &SECTIONS, &cfg);
        assert_eq!(nav.active_section, Some(0));
        nav.on_scroll(92, &SECTIONS, &cfg);
        assert_eq!(nav.active_section, Some(1));

        nav.on_scroll(242, &SECTIONS, &cfg);
        assert_eq!(nav.active_section, Some(2));
    }

    #[test]
    fn test_active_none_past_everything() {
        let mut nav = NavState::new();
        nav.on_scroll(500, &SECTIONS, &config());
        assert_eq!(nav.active_section, None);
    }
}
