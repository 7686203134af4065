//! Scroll animation controller.
//!
//! Owns the document row offset. Wheel and key scrolling accumulate deltas
//! that are batched per frame; anchor navigation animates to an absolute
//! target. Call [`ScrollAnimator::update`] every frame to advance.

use std::time::{Duration, Instant};

use super::config::{MotionConfig, MotionConfigExt};
use super::easing::{EasingKind, EasingKindExt};
use super::timing::{is_complete, lerp_u16, progress_at};

/// In-flight scroll animation
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingKind,
}

/// Smooth scroll controller for the page viewport
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: MotionConfig,
    /// Current row offset (always up-to-date)
    current_scroll: u16,
    /// Accumulated delta from scroll events since the last frame
    pending_delta: i32,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            animation: None,
            config,
            current_scroll: 0,
            pending_delta: 0,
        }
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Check if there is pending work (animation or batched delta).
    /// Drives the switch to the fast frame rate.
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Final position after the current animation settles
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    /// Current interpolated row offset
    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current_scroll
    }

    /// Set the offset immediately, dropping any animation
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.current_scroll = scroll;
        self.pending_delta = 0;
    }

    /// Animate to an absolute target row.
    ///
    /// Used by anchor navigation: the nav bar scrolls to
    /// `section_top - nav_offset`. Jumps when smooth scrolling is disabled.
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16, now: Instant) {
        let target = target.min(max_scroll);

        if !self.config.is_smooth() {
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        let from = self.current_scroll;
        if from == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Scroll by a delta (positive = down). Events within one frame batch.
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.config.is_smooth() {
            let new_scroll = (self.current_scroll as i32 + delta).clamp(0, max_scroll as i32) as u16;
            self.current_scroll = new_scroll;
            self.animation = None;
            return;
        }

        self.pending_delta += delta;
    }

    /// Scroll down by the configured line count
    pub fn scroll_down(&mut self, max_scroll: u16) {
        let lines = if self.config.is_smooth() {
            1
        } else {
            self.config.scroll_lines as i32
        };
        self.scroll_by(lines, max_scroll);
    }

    /// Scroll up by the configured line count
    pub fn scroll_up(&mut self, max_scroll: u16) {
        let lines = if self.config.is_smooth() {
            1
        } else {
            self.config.scroll_lines as i32
        };
        self.scroll_by(-lines, max_scroll);
    }

    pub fn scroll_half_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(half_page, max_scroll);
    }

    pub fn scroll_half_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(-half_page, max_scroll);
    }

    pub fn scroll_full_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(viewport_height as i32, max_scroll);
    }

    pub fn scroll_full_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-(viewport_height as i32), max_scroll);
    }

    /// Advance the animation and return the current row offset.
    ///
    /// Batched deltas retarget relative to the animation's destination so a
    /// run of wheel events chains into one motion.
    pub fn update(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if self.pending_delta != 0 {
            let target = self.target_scroll();
            let new_target = (target as i32 + self.pending_delta).clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;

            if new_target != self.current_scroll {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current_scroll,
                    to: new_target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration, now) {
                self.current_scroll = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = progress_at(anim.start, anim.duration, now);
                let eased_t = anim.easing.apply(t);
                self.current_scroll = lerp_u16(anim.from, anim.to, eased_t).min(max_scroll);
            }
        }

        self.current_scroll
    }

    /// Drop any active animation and stop at the current position
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth_config(duration_ms: u64) -> MotionConfig {
        MotionConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let config = MotionConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config);

        animator.scroll_to(100, 200, Instant::now());
        assert_eq!(animator.current_scroll(), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_starts() {
        let mut animator = ScrollAnimator::new(smooth_config(100));
        animator.scroll_to(100, 200, Instant::now());
        assert!(animator.is_animating());
        assert_eq!(animator.target_scroll(), 100);
    }

    #[test]
    fn test_scroll_by_batching() {
        let mut animator = ScrollAnimator::new(smooth_config(100));

        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);

        animator.update(200, Instant::now());
        assert_eq!(animator.target_scroll(), 30);
    }

    #[test]
    fn test_scroll_clamp_max() {
        let mut animator = ScrollAnimator::default();
        animator.set_scroll(50);
        animator.scroll_to(300, 100, Instant::now());
        animator.update(100, Instant::now());
        assert!(animator.target_scroll() <= 100);
    }

    #[test]
    fn test_animation_settles_at_target() {
        let mut animator = ScrollAnimator::new(smooth_config(100));
        let start = Instant::now();
        animator.scroll_to(80, 200, start);
        let settled = animator.update(200, start + Duration::from_millis(150));
        assert_eq!(settled, 80);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_update_is_monotonic_toward_target() {
        let mut animator = ScrollAnimator::new(smooth_config(100));
        let start = Instant::now();
        animator.scroll_to(100, 200, start);

        let mut prev = 0;
        for ms in [10u64, 30, 50, 70, 90, 110] {
            let pos = animator.update(200, start + Duration::from_millis(ms));
            assert!(pos >= prev, "scroll went backwards at {}ms", ms);
            prev = pos;
        }
        assert_eq!(prev, 100);
    }
}
