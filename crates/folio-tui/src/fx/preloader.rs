//! Startup preloader overlay. Disabled by default.
//!
//! A full-screen panel with a logo and a progress bar that fills over a
//! fixed window, then fades out and removes itself. `Loading -> Fading ->
//! Done` is the only path.

use std::time::{Duration, Instant};

use crate::scroll::easing::EasingKind;
use crate::scroll::timing::progress_at;
use crate::scroll::EasingKindExt;

/// Time the bar takes to fill
pub const LOAD_DURATION: Duration = Duration::from_millis(1500);
/// Fade-out window after the bar fills
pub const FADE_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Loading { since: Instant },
    Fading { since: Instant },
    Done,
}

#[derive(Debug, Clone)]
pub struct Preloader {
    phase: Phase,
}

impl Preloader {
    pub fn new(now: Instant) -> Self {
        Self {
            phase: Phase::Loading { since: now },
        }
    }

    pub fn update(&mut self, now: Instant) {
        match self.phase {
            Phase::Loading { since } => {
                if now.saturating_duration_since(since) >= LOAD_DURATION {
                    self.phase = Phase::Fading { since: now };
                }
            }
            Phase::Fading { since } => {
                if now.saturating_duration_since(since) >= FADE_DURATION {
                    self.phase = Phase::Done;
                }
            }
            Phase::Done => {}
        }
    }

    /// Progress bar fill in [0, 1]
    pub fn bar_progress(&self, now: Instant) -> f64 {
        match self.phase {
            Phase::Loading { since } => {
                EasingKind::Cubic.apply(progress_at(since, LOAD_DURATION, now))
            }
            _ => 1.0,
        }
    }

    /// Overlay opacity in [0, 1]; reaches 0 just before removal
    pub fn opacity(&self, now: Instant) -> f64 {
        match self.phase {
            Phase::Loading { .. } => 1.0,
            Phase::Fading { since } => 1.0 - progress_at(since, FADE_DURATION, now),
            Phase::Done => 0.0,
        }
    }

    /// Once done the overlay leaves the frame entirely
    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_advance_in_order() {
        let t0 = Instant::now();
        let mut pre = Preloader::new(t0);
        assert!(!pre.is_done());
        assert_eq!(pre.opacity(t0), 1.0);

        pre.update(t0 + Duration::from_millis(800));
        assert!(!pre.is_done());
        let mid = pre.bar_progress(t0 + Duration::from_millis(800));
        assert!(mid > 0.0 && mid < 1.0);

        // Bar fills, fade begins
        let t_fill = t0 + Duration::from_millis(1500);
        pre.update(t_fill);
        assert_eq!(pre.bar_progress(t_fill), 1.0);
        let fade_mid = t_fill + Duration::from_millis(250);
        let opacity = pre.opacity(fade_mid);
        assert!(opacity > 0.0 && opacity < 1.0);

        // Fade completes, overlay removed
        pre.update(t_fill + Duration::from_millis(500));
        assert!(pre.is_done());
        assert_eq!(pre.opacity(t_fill + Duration::from_millis(600)), 0.0);
    }

    #[test]
    fn test_done_is_terminal() {
        let t0 = Instant::now();
        let mut pre = Preloader::new(t0);
        pre.update(t0 + Duration::from_millis(1500));
        pre.update(t0 + Duration::from_millis(2000));
        assert!(pre.is_done());
        pre.update(t0 + Duration::from_millis(9000));
        assert!(pre.is_done());
    }
}
