//! Stat counter tween.
//!
//! Each stat element counts from 0 to its target over a fixed 2000ms using
//! the exponential ease-out curve, starting the first time at least half of
//! it is visible. The trigger is strictly one-shot and playback terminates
//! by reaching full duration; there is no done flag beyond the state itself.

use std::time::{Duration, Instant};

use crate::scroll::easing::exponential_ease_out;
use crate::scroll::timing::progress_at;

use super::visibility::OneShot;

/// Visibility fraction that starts the tween
pub const COUNTER_THRESHOLD: f64 = 0.5;
/// Fixed tween duration
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Play {
    Idle,
    Playing { started: Instant },
    Done,
}

/// One animated stat value
#[derive(Debug, Clone)]
pub struct Counter {
    target: f64,
    /// Decimal targets render with one fractional digit, integers floored
    decimal: bool,
    trigger: OneShot,
    play: Play,
    enabled: bool,
}

impl Counter {
    pub fn new(target: f64, enabled: bool) -> Self {
        Self {
            target,
            decimal: target.fract() != 0.0,
            trigger: OneShot::new(),
            play: Play::Idle,
            enabled,
        }
    }

    /// Observe the stat block's visibility; arms playback exactly once.
    pub fn observe(&mut self, fraction: f64, now: Instant) {
        if !self.enabled {
            return;
        }
        if self.trigger.observe(fraction, COUNTER_THRESHOLD) {
            self.play = Play::Playing { started: now };
        }
    }

    /// Advance playback; self-terminates when the duration elapses.
    pub fn update(&mut self, now: Instant) {
        if let Play::Playing { started } = self.play {
            if now.saturating_duration_since(started) >= COUNTER_DURATION {
                self.play = Play::Done;
            }
        }
    }

    /// Current eased value: 0 before playback, exact target after.
    pub fn value(&self, now: Instant) -> f64 {
        if !self.enabled {
            return self.target;
        }
        match self.play {
            Play::Idle => 0.0,
            Play::Done => self.target,
            Play::Playing { started } => {
                let t = progress_at(started, COUNTER_DURATION, now);
                self.target * exponential_ease_out(t)
            }
        }
    }

    /// Rendered text for the current frame.
    pub fn display(&self, now: Instant) -> String {
        let value = self.value(now);
        if self.decimal {
            format!("{:.1}", value)
        } else {
            format!("{}", value.floor() as i64)
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.play, Play::Playing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(target: f64) -> (Counter, Instant) {
        let mut counter = Counter::new(target, true);
        let t0 = Instant::now();
        counter.observe(0.6, t0);
        (counter, t0)
    }

    #[test]
    fn test_value_boundaries() {
        let (mut counter, t0) = started(150.0);
        assert_eq!(counter.value(t0), 0.0);

        let end = t0 + COUNTER_DURATION;
        counter.update(end);
        assert_eq!(counter.value(end), 150.0);
    }

    #[test]
    fn test_value_monotonic() {
        let (counter, t0) = started(100.0);
        let mut prev = -1.0;
        for ms in (0..=2000).step_by(100) {
            let v = counter.value(t0 + Duration::from_millis(ms));
            assert!(v >= prev, "value decreased at {}ms", ms);
            prev = v;
        }
    }

    #[test]
    fn test_integer_target_renders_floored() {
        let (mut counter, t0) = started(150.0);
        // Every sampled frame is an integer string with no fractional digits
        for ms in (0..=2000).step_by(250) {
            let text = counter.display(t0 + Duration::from_millis(ms));
            assert!(!text.contains('.'), "unexpected decimal in {:?}", text);
        }
        let end = t0 + COUNTER_DURATION;
        counter.update(end);
        assert_eq!(counter.display(end), "150");
    }

    #[test]
    fn test_decimal_target_renders_one_digit() {
        let (mut counter, t0) = started(98.6);
        for ms in (0..=2000).step_by(250) {
            let text = counter.display(t0 + Duration::from_millis(ms));
            let (_, frac) = text.split_once('.').expect("decimal point expected");
            assert_eq!(frac.len(), 1, "expected one fractional digit in {:?}", text);
        }
        let end = t0 + COUNTER_DURATION;
        counter.update(end);
        assert_eq!(counter.display(end), "98.6");
    }

    #[test]
    fn test_decimal_4_5() {
        let (counter, t0) = started(4.5);
        let text = counter.display(t0 + Duration::from_millis(700));
        let (_, frac) = text.split_once('.').expect("decimal point expected");
        assert_eq!(frac.len(), 1);
    }

    #[test]
    fn test_trigger_is_one_shot() {
        let mut counter = Counter::new(10.0, true);
        let t0 = Instant::now();
        counter.observe(0.6, t0);
        assert!(counter.is_animating());

        // A later visibility event must not restart playback: at 600ms the
        // value reflects the original start (ease(0.3) ≈ 0.875), not a
        // restart at 500ms (ease(0.05) ≈ 0.29)
        let later = t0 + Duration::from_millis(500);
        counter.observe(0.9, later);
        let v = counter.value(t0 + Duration::from_millis(600));
        assert!(v > 5.0, "playback was restarted: {}", v);
    }

    #[test]
    fn test_below_threshold_does_not_start() {
        let mut counter = Counter::new(10.0, true);
        counter.observe(0.4, Instant::now());
        assert!(!counter.is_animating());
        assert_eq!(counter.value(Instant::now()), 0.0);
    }

    #[test]
    fn test_playback_self_terminates() {
        let (mut counter, t0) = started(42.0);
        counter.update(t0 + Duration::from_millis(2500));
        assert!(!counter.is_animating());
        assert_eq!(counter.display(t0 + Duration::from_millis(3000)), "42");
    }

    #[test]
    fn test_disabled_shows_target() {
        let counter = Counter::new(7.0, false);
        assert_eq!(counter.display(Instant::now()), "7");
    }
}
