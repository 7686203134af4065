use std::sync::Arc;
use std::time::Instant;

use ratatui::layout::Rect;
use tracing::debug;

use folio_core::{AppConfig, Portfolio};

use crate::fx::parallax::{normalize, orb_offset, Orb};
use crate::fx::pointer::{hit_test, HoverTarget};
use crate::fx::{Counter, CursorTrail, IntroFade, NavState, Preloader, RevealEngine, Typewriter};
use crate::input::Action;
use crate::layout::{BlockKind, DocLayout};
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;

/// Application state.
///
/// Each effect owns its state and touches nothing of its siblings; the app
/// is only the composition root wiring events and ticks to them, so any
/// single effect can be disabled (or deleted) without the rest noticing.
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub portfolio: Portfolio,

    /// Geometry recorded by the last composed frame
    pub doc: DocLayout,
    /// Content area of the last draw, for pointer math
    pub content_area: Rect,

    // Effect states, one per catalogue entry
    pub animator: ScrollAnimator,
    pub nav: NavState,
    pub reveal: RevealEngine,
    pub counters: Vec<Counter>,
    pub typewriter: Typewriter,
    pub orbs: Vec<Orb>,
    pub orb_offsets: Vec<(f32, f32)>,
    pub trail: CursorTrail,
    pub preloader: Option<Preloader>,
    pub intro: IntroFade,

    /// Pointer position in screen cells, if the mouse is inside the terminal
    pub pointer: Option<(u16, u16)>,
    /// What the pointer is over, from the last draw's hit rects
    pub hover: Option<HoverTarget>,
    /// Screen rect of the hovered element, for tilt math
    pub hover_rect: Option<Rect>,
    /// Hit rects registered during the last draw
    pub hit_rects: Vec<(Rect, HoverTarget)>,

    /// Last scroll offset the nav rules saw; None before the first frame
    last_nav_scroll: Option<u16>,
    pub should_quit: bool,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
}

impl App {
    pub fn new(portfolio: Portfolio, config: Arc<AppConfig>, theme: Theme) -> Self {
        let effects = &config.effects;
        let counters = portfolio
            .hero
            .stats
            .iter()
            .map(|stat| Counter::new(stat.target, effects.counters))
            .collect();
        let typewriter = Typewriter::new(&portfolio.hero.code_sample, effects.typewriter);
        let trail = CursorTrail::new(effects.cursor_trail, effects.max_trail_particles);
        let preloader = effects.preloader.then(|| Preloader::new(Instant::now()));

        let orbs = vec![
            Orb { col: 12, row: 2, size: 5, palette: 0 },
            Orb { col: 48, row: 6, size: 4, palette: 1 },
            Orb { col: 30, row: 12, size: 3, palette: 2 },
        ];
        let orb_offsets = vec![(0.0, 0.0); orbs.len()];

        let mut app = Self {
            config: config.clone(),
            theme,
            portfolio,
            doc: DocLayout::default(),
            content_area: Rect::default(),
            animator: ScrollAnimator::new(config.motion.clone()),
            nav: NavState::new(),
            reveal: RevealEngine::new(0, effects.reveal),
            counters,
            typewriter,
            orbs,
            orb_offsets,
            trail,
            preloader,
            intro: IntroFade::new(),
            pointer: None,
            hover: None,
            hover_rect: None,
            hit_rects: Vec::new(),
            last_nav_scroll: None,
            should_quit: false,
            pending_key: None,
        };
        // Without a preloader the page is "loaded" immediately
        if app.preloader.is_none() {
            app.intro.begin(Instant::now());
        }
        app
    }

    #[inline]
    pub fn scroll(&self) -> u16 {
        self.animator.current_scroll()
    }

    fn max_scroll(&self) -> u16 {
        self.doc.max_scroll(self.content_area.height)
    }

    /// Apply an input action
    pub fn on_action(&mut self, action: Action, now: Instant) {
        let max = self.max_scroll();
        let viewport = self.content_area.height;

        if action != Action::PendingG {
            self.pending_key = None;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.animator.scroll_down(max),
            Action::ScrollUp => self.animator.scroll_up(max),
            Action::ScrollHalfPageDown => self.animator.scroll_half_page_down(viewport, max),
            Action::ScrollHalfPageUp => self.animator.scroll_half_page_up(viewport, max),
            Action::ScrollPageDown => self.animator.scroll_full_page_down(viewport, max),
            Action::ScrollPageUp => self.animator.scroll_full_page_up(viewport, max),
            Action::JumpToTop => self.animator.scroll_to(0, max, now),
            Action::JumpToBottom => self.animator.scroll_to(max, max, now),
            Action::PendingG => self.pending_key = Some('g'),
            Action::NextSection => {
                let current = self.nav.active_section.unwrap_or(0);
                let next = (current + 1).min(self.doc.sections.len().saturating_sub(1));
                self.scroll_to_section(next, now);
            }
            Action::PrevSection => {
                let current = self.nav.active_section.unwrap_or(0);
                self.scroll_to_section(current.saturating_sub(1), now);
            }
            Action::GoToSection(index) => self.scroll_to_section(index, now),
            Action::PointerMoved(x, y) => self.on_pointer_moved(x, y),
            Action::Click(x, y) => self.on_click(x, y, now),
            Action::None => {}
        }
    }

    /// Animate to a section anchor, leaving room for the nav bar
    pub fn scroll_to_section(&mut self, index: usize, now: Instant) {
        if let Some(top) = self.doc.anchor(index) {
            let target = top.saturating_sub(self.config.motion.nav_offset);
            debug!(section = index, target, "anchor scroll");
            self.animator.scroll_to(target, self.max_scroll(), now);
        }
    }

    fn on_pointer_moved(&mut self, x: u16, y: u16) {
        self.pointer = Some((x, y));

        // Nav links stay clickable either way; the hover gate only covers
        // the decorative treatments
        let target = hit_test((x, y), &self.hit_rects);
        self.hover = match target {
            Some(HoverTarget::NavLink(_)) => target,
            _ if self.config.effects.hover => target,
            _ => None,
        };
        self.hover_rect = self
            .hit_rects
            .iter()
            .rev()
            .find(|(rect, target)| {
                Some(*target) == self.hover
                    && rect.contains(ratatui::layout::Position { x, y })
            })
            .map(|&(rect, _)| rect);

        // Parallax reads the pointer normalized against the whole viewport
        if self.config.effects.parallax {
            let area = self.content_area;
            let (nx, ny) = normalize((x, y), area.width.max(1), area.height.max(1));
            for (index, slot) in self.orb_offsets.iter_mut().enumerate() {
                *slot = orb_offset(nx, ny, index, self.config.effects.parallax_strength);
            }
        }

        self.trail.on_pointer_move(x, y);
    }

    fn on_click(&mut self, x: u16, y: u16, now: Instant) {
        match hit_test((x, y), &self.hit_rects) {
            Some(HoverTarget::NavLink(index)) => self.scroll_to_section(index, now),
            // The hero buttons are anchors too: work and contact
            Some(HoverTarget::HeroButton(0)) => self.scroll_to_section(4, now),
            Some(HoverTarget::HeroButton(_)) => {
                let last = self.doc.sections.len().saturating_sub(1);
                self.scroll_to_section(last, now);
            }
            _ => {}
        }
    }

    /// Per-frame update: advance the preloader, the scroll animation, the
    /// scroll-driven rules and every playing effect.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(preloader) = self.preloader.as_mut() {
            preloader.update(now);
            if preloader.is_done() {
                self.preloader = None;
                self.intro.begin(now);
            } else {
                // The page is inert behind the overlay
                return;
            }
        }

        let scroll = self.animator.update(self.max_scroll(), now);

        // The nav rules compare against the previous offset, so they only
        // run on actual movement (plus once for the initial frame)
        if self.last_nav_scroll != Some(scroll) {
            self.nav
                .on_scroll(scroll, &self.doc.sections, &self.config.motion);
            self.last_nav_scroll = Some(scroll);
        }

        let viewport = self.content_area.height;

        // Reveal engine watches every reveal block
        if self.doc.reveal_count > 0 {
            if self.reveal.len() != self.doc.reveal_count {
                self.reveal.resize(self.doc.reveal_count);
            }
            let mut spans = vec![(0u16, 0u16); self.doc.reveal_count];
            for block in &self.doc.blocks {
                if let Some(index) = block.reveal_index {
                    spans[index] = (block.top, block.height);
                }
            }
            self.reveal.observe(&spans, scroll, viewport, now);
        }

        // Counters arm at half visibility of the stats row
        if let Some(block) = self.doc.find(BlockKind::HeroStats) {
            let fraction = crate::fx::visibility::visible_fraction(
                block.top,
                block.height,
                scroll,
                viewport,
            );
            for counter in &mut self.counters {
                counter.observe(fraction, now);
            }
        }
        for counter in &mut self.counters {
            counter.update(now);
        }

        // Typewriter arms at half visibility of the code window
        if let Some(block) = self.doc.find(BlockKind::CodeWindow) {
            let fraction = crate::fx::visibility::visible_fraction(
                block.top,
                block.height,
                scroll,
                viewport,
            );
            self.typewriter.observe(fraction, now);
        }
        self.typewriter.update(now);

        self.trail.update();
    }

    /// Whether the next frame should come at the animation tick rate
    pub fn needs_fast_update(&self, now: Instant) -> bool {
        self.preloader.is_some()
            || self.animator.needs_update()
            || self.reveal.is_animating(now)
            || self.counters.iter().any(Counter::is_animating)
            || self.typewriter.is_playing()
            || (self.trail.is_enabled() && !self.trail.is_empty())
            || self.intro.is_animating(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::AppConfig;

    fn test_app() -> App {
        let mut app = App::new(
            Portfolio::sample(),
            Arc::new(AppConfig::default()),
            Theme::default(),
        );
        // Pretend one frame was composed
        app.content_area = Rect::new(0, 1, 80, 24);
        app.doc = DocLayout {
            blocks: Vec::new(),
            sections: vec![(0, 40), (40, 30), (70, 30)],
            total_height: 100,
            reveal_count: 0,
        };
        app
    }

    #[test]
    fn test_anchor_scroll_targets_section_minus_offset() {
        let mut app = test_app();
        let now = Instant::now();
        app.on_action(Action::GoToSection(1), now);
        // nav_offset default is 4
        assert_eq!(app.animator.target_scroll(), 36);
    }

    #[test]
    fn test_anchor_scroll_out_of_range_is_noop() {
        let mut app = test_app();
        app.on_action(Action::GoToSection(9), Instant::now());
        assert_eq!(app.animator.target_scroll(), 0);
    }

    #[test]
    fn test_quit_action() {
        let mut app = test_app();
        app.on_action(Action::Quit, Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn test_pending_g_clears_on_other_key() {
        let mut app = test_app();
        app.on_action(Action::PendingG, Instant::now());
        assert_eq!(app.pending_key, Some('g'));
        app.on_action(Action::ScrollDown, Instant::now());
        assert_eq!(app.pending_key, None);
    }

    #[test]
    fn test_pointer_move_updates_parallax() {
        let mut app = test_app();
        app.on_action(Action::PointerMoved(79, 23), Instant::now());
        assert!(app.pointer.is_some());
        // Pointer at the far corner pulls every orb positively
        for &(dx, dy) in &app.orb_offsets {
            assert!(dx > 0.0 && dy > 0.0);
        }
    }

    #[test]
    fn test_nav_click_scrolls() {
        let mut app = test_app();
        app.hit_rects = vec![(Rect::new(10, 0, 8, 1), HoverTarget::NavLink(2))];
        app.on_action(Action::Click(12, 0), Instant::now());
        assert_eq!(app.animator.target_scroll(), 66);
    }

    #[test]
    fn test_tick_with_preloader_holds_page() {
        let config = AppConfig {
            effects: folio_core::EffectsConfig {
                preloader: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut app = App::new(Portfolio::sample(), Arc::new(config), Theme::default());
        app.content_area = Rect::new(0, 1, 80, 24);
        assert!(app.preloader.is_some());
        app.on_tick(Instant::now());
        // Still loading: the overlay is in place and the page is inert
        assert!(app.preloader.is_some());
    }
}
