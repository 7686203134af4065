//! Reveal-on-scroll.
//!
//! Blocks start hidden and flip to revealed the first time at least 10% of
//! them scrolls into view. The flip is one-way: leaving the viewport never
//! hides a block again. Stagger children inside a block fade with a delay
//! proportional to their index.

use std::time::{Duration, Instant};

use crate::scroll::easing::EasingKind;
use crate::scroll::EasingKindExt;

use super::visibility::visible_fraction;

/// Visibility fraction that triggers the reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Fade duration once a block starts revealing
pub const REVEAL_DURATION: Duration = Duration::from_millis(800);
/// Extra delay per stagger child index
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    /// Triggered; alpha ramps from the trigger instant
    Revealing { since: Instant },
    Revealed,
}

/// Per-block reveal state for the whole document
#[derive(Debug)]
pub struct RevealEngine {
    states: Vec<RevealState>,
    enabled: bool,
}

impl RevealEngine {
    pub fn new(block_count: usize, enabled: bool) -> Self {
        // With the effect disabled every block is shown immediately
        let initial = if enabled {
            RevealState::Hidden
        } else {
            RevealState::Revealed
        };
        Self {
            states: vec![initial; block_count],
            enabled,
        }
    }

    /// Reset for a new document layout, preserving nothing.
    pub fn resize(&mut self, block_count: usize) {
        let initial = if self.enabled {
            RevealState::Hidden
        } else {
            RevealState::Revealed
        };
        self.states = vec![initial; block_count];
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Out-of-range indices (a frame composed before the engine was sized)
    /// report the initial state for the mode, so nothing flashes visible
    /// ahead of its reveal.
    pub fn state(&self, index: usize) -> RevealState {
        self.states.get(index).copied().unwrap_or(if self.enabled {
            RevealState::Hidden
        } else {
            RevealState::Revealed
        })
    }

    /// Observe current visibility for every block. Hidden blocks crossing
    /// the threshold begin revealing; everything else is a no-op, so
    /// repeated intersection in either direction is idempotent.
    pub fn observe(
        &mut self,
        blocks: &[(u16, u16)],
        scroll: u16,
        viewport_height: u16,
        now: Instant,
    ) {
        if !self.enabled {
            return;
        }
        for (index, &(top, height)) in blocks.iter().enumerate() {
            if index >= self.states.len() {
                break;
            }
            if self.states[index] != RevealState::Hidden {
                continue;
            }
            if visible_fraction(top, height, scroll, viewport_height) >= REVEAL_THRESHOLD {
                self.states[index] = RevealState::Revealing { since: now };
            }
        }
    }

    /// Alpha for a block in [0, 1]; child_index applies the stagger delay.
    ///
    /// A block stays `Revealing` once triggered; each child's alpha saturates
    /// at 1.0 when its own delayed fade completes, so late children never
    /// jump when earlier ones finish.
    pub fn alpha(&self, index: usize, child_index: usize, now: Instant) -> f64 {
        match self.state(index) {
            RevealState::Hidden => 0.0,
            RevealState::Revealed => 1.0,
            RevealState::Revealing { since } => {
                let delay = stagger_delay(child_index);
                let elapsed = now.saturating_duration_since(since);
                if elapsed < delay {
                    return 0.0;
                }
                let t = (elapsed - delay).as_secs_f64() / REVEAL_DURATION.as_secs_f64();
                EasingKind::Cubic.apply(t)
            }
        }
    }

    /// Whether any block is mid-fade and wants the fast frame rate
    pub fn is_animating(&self, now: Instant) -> bool {
        self.states.iter().any(|state| match state {
            RevealState::Revealing { since } => {
                // Longest possible child delay is bounded by the fade window
                now.saturating_duration_since(*since) < REVEAL_DURATION + STAGGER_STEP * 16
            }
            _ => false,
        })
    }
}

/// Delay for the stagger child at `index`: index × 100ms, strictly increasing.
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP * index as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_way() {
        let mut engine = RevealEngine::new(1, true);
        let blocks = [(40u16, 10u16)];
        let t0 = Instant::now();

        // Not yet visible
        engine.observe(&blocks, 0, 30, t0);
        assert_eq!(engine.state(0), RevealState::Hidden);

        // Scrolled into view: reveals
        engine.observe(&blocks, 20, 30, t0);
        assert!(matches!(engine.state(0), RevealState::Revealing { .. }));

        // Scrolled away and back: still revealing/revealed, never hidden
        engine.observe(&blocks, 0, 30, t0 + Duration::from_millis(50));
        assert!(!matches!(engine.state(0), RevealState::Hidden));
        engine.observe(&blocks, 20, 30, t0 + Duration::from_millis(100));
        assert!(!matches!(engine.state(0), RevealState::Hidden));
    }

    #[test]
    fn test_alpha_ramps_to_one() {
        let mut engine = RevealEngine::new(1, true);
        let blocks = [(0u16, 10u16)];
        let t0 = Instant::now();
        engine.observe(&blocks, 0, 30, t0);

        assert_eq!(engine.alpha(0, 0, t0), 0.0);
        let mid = engine.alpha(0, 0, t0 + Duration::from_millis(400));
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(engine.alpha(0, 0, t0 + Duration::from_millis(900)), 1.0);
    }

    #[test]
    fn test_stagger_delays_strictly_increase() {
        let mut prev = stagger_delay(0);
        assert_eq!(prev, Duration::ZERO);
        for i in 1..8 {
            let d = stagger_delay(i);
            assert!(d > prev);
            assert_eq!(d, Duration::from_millis(100 * i as u64));
            prev = d;
        }
    }

    #[test]
    fn test_staggered_child_waits_its_turn() {
        let mut engine = RevealEngine::new(1, true);
        let blocks = [(0u16, 10u16)];
        let t0 = Instant::now();
        engine.observe(&blocks, 0, 30, t0);

        // At 150ms child 0 is fading but child 3 (300ms delay) has not started
        let now = t0 + Duration::from_millis(150);
        assert!(engine.alpha(0, 0, now) > 0.0);
        assert_eq!(engine.alpha(0, 3, now), 0.0);
    }

    #[test]
    fn test_disabled_engine_shows_everything() {
        let engine = RevealEngine::new(2, false);
        assert_eq!(engine.alpha(0, 0, Instant::now()), 1.0);
        assert_eq!(engine.alpha(1, 5, Instant::now()), 1.0);
    }
}
