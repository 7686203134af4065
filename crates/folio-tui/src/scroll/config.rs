//! Motion configuration helpers.

use std::time::Duration;

pub use folio_core::{EasingKind, MotionConfig};

/// Extension trait for [`MotionConfig`] with derived values
pub trait MotionConfigExt {
    /// Scroll animation duration
    fn animation_duration(&self) -> Duration;

    /// Tick duration while animations are active
    fn animation_tick_duration(&self) -> Duration;

    /// Whether smooth scrolling is effectively enabled
    fn is_smooth(&self) -> bool;
}

impl MotionConfigExt for MotionConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_duration() {
        let config = MotionConfig {
            animation_duration_ms: 200,
            ..Default::default()
        };
        assert_eq!(config.animation_duration(), Duration::from_millis(200));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = MotionConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_tick_duration_fallback() {
        let config = MotionConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }
}
