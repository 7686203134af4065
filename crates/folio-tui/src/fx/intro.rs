//! Hero intro fade.
//!
//! On startup (or once the preloader clears) the hero lines fade in
//! sequentially, each delayed by its index.

use std::time::{Duration, Instant};

use crate::scroll::easing::EasingKind;
use crate::scroll::EasingKindExt;

/// Delay between consecutive hero elements
pub const INTRO_STAGGER: Duration = Duration::from_millis(150);
/// Fade window per element
pub const INTRO_DURATION: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy)]
pub struct IntroFade {
    started: Option<Instant>,
}

impl IntroFade {
    /// Created unarmed; [`IntroFade::begin`] fires on load
    pub fn new() -> Self {
        Self { started: None }
    }

    /// Start the sequence; later calls keep the original start
    pub fn begin(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    /// Alpha for the element at `index`
    pub fn alpha(&self, index: usize, now: Instant) -> f64 {
        let Some(started) = self.started else {
            return 0.0;
        };
        let delay = INTRO_STAGGER * index as u32;
        let elapsed = now.saturating_duration_since(started);
        if elapsed < delay {
            return 0.0;
        }
        let t = (elapsed - delay).as_secs_f64() / INTRO_DURATION.as_secs_f64();
        EasingKind::Cubic.apply(t)
    }

    /// Whether any element is still fading (bounded by a generous tail)
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.started {
            Some(started) => {
                now.saturating_duration_since(started) < INTRO_DURATION + INTRO_STAGGER * 12
            }
            None => false,
        }
    }
}

impl Default for IntroFade {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_is_invisible() {
        let intro = IntroFade::new();
        assert_eq!(intro.alpha(0, Instant::now()), 0.0);
    }

    #[test]
    fn test_sequential_delays() {
        let mut intro = IntroFade::new();
        let t0 = Instant::now();
        intro.begin(t0);

        // At 200ms element 0 is fading, element 2 (300ms delay) has not begun
        let now = t0 + Duration::from_millis(200);
        assert!(intro.alpha(0, now) > 0.0);
        assert_eq!(intro.alpha(2, now), 0.0);

        // Much later everything is fully shown
        let late = t0 + Duration::from_millis(3000);
        assert_eq!(intro.alpha(0, late), 1.0);
        assert_eq!(intro.alpha(2, late), 1.0);
    }

    #[test]
    fn test_begin_is_idempotent() {
        let mut intro = IntroFade::new();
        let t0 = Instant::now();
        intro.begin(t0);
        let alpha_before = intro.alpha(0, t0 + Duration::from_millis(300));
        intro.begin(t0 + Duration::from_millis(250));
        let alpha_after = intro.alpha(0, t0 + Duration::from_millis(300));
        assert_eq!(alpha_before, alpha_after);
    }
}
