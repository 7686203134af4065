//! Smooth scrolling for the portfolio page.
//!
//! Anchor navigation and wheel/key scrolling both go through [`ScrollAnimator`],
//! which interpolates the document row offset over a configurable duration and
//! easing curve instead of jumping.

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::ScrollAnimator;
pub use config::MotionConfigExt;
pub use easing::EasingKindExt;
