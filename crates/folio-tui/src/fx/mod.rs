//! The decorative effect catalogue.
//!
//! Every effect is an independent component: its own typed state, its own
//! update transition, no shared mutable state with its siblings. The page
//! widgets read the states and turn them into styles each frame; no effect
//! writes to the screen directly.

pub mod counter;
pub mod intro;
pub mod nav;
pub mod parallax;
pub mod particles;
pub mod pointer;
pub mod preloader;
pub mod reveal;
pub mod typewriter;
pub mod visibility;

pub use counter::Counter;
pub use intro::IntroFade;
pub use nav::NavState;
pub use particles::CursorTrail;
pub use preloader::Preloader;
pub use reveal::RevealEngine;
pub use typewriter::Typewriter;
