//! Typewriter playback of the hero code sample.
//!
//! The source is tag markup ([`folio_core::markup`]). Plain text appears one
//! character per step; a tag is buffered from `<` to `>` and committed to the
//! output whole, so the output is balanced markup after every commit and the
//! renderer never sees a half-open tag. Playback starts once, the first time
//! half the code window is visible, and ends when the source is exhausted.
//! There is no pause, resume or restart.

use std::time::{Duration, Instant};

use super::visibility::OneShot;

/// Visibility fraction that starts playback
pub const TYPE_THRESHOLD: f64 = 0.5;
/// Delay after committing a plain-text character
pub const TYPE_STEP: Duration = Duration::from_millis(15);

/// The transition state: one mutable cursor into the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeState {
    /// Index of the next source character to consume
    pub position: usize,
    /// Currently accumulating a tag
    pub in_tag: bool,
    /// Partial tag text, not yet part of the output
    pub tag_buffer: String,
    /// Committed output, balanced at every commit
    pub output: String,
}

/// What a single step did to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Output unchanged (a character went into the tag buffer)
    Buffered,
    /// Output grew; the delay before the next step applies
    Committed,
    /// Source exhausted
    Exhausted,
}

/// Process one source character.
///
/// This is the pure transition of the effect; pacing and triggering live in
/// [`Typewriter`]. Kept separate so the structural invariants are testable
/// without a terminal.
pub fn step(state: &mut TypeState, source: &[char]) -> StepOutcome {
    let Some(&ch) = source.get(state.position) else {
        return StepOutcome::Exhausted;
    };
    state.position += 1;

    match ch {
        '<' => {
            state.in_tag = true;
            state.tag_buffer.clear();
            state.tag_buffer.push('<');
            StepOutcome::Buffered
        }
        '>' if state.in_tag => {
            state.in_tag = false;
            state.tag_buffer.push('>');
            // The whole tag lands in one atomic commit
            state.output.push_str(&state.tag_buffer);
            state.tag_buffer.clear();
            StepOutcome::Committed
        }
        _ if state.in_tag => {
            state.tag_buffer.push(ch);
            StepOutcome::Buffered
        }
        _ => {
            state.output.push(ch);
            StepOutcome::Committed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Play {
    Idle,
    Playing { next_due: Instant },
    Done,
}

/// The paced, triggerable typewriter over one source string.
#[derive(Debug, Clone)]
pub struct Typewriter {
    source_text: String,
    source: Vec<char>,
    state: TypeState,
    trigger: OneShot,
    play: Play,
    enabled: bool,
}

impl Typewriter {
    /// Capture the source markup. The code window renders nothing until
    /// playback begins, mirroring the element being cleared at init.
    pub fn new(source: &str, enabled: bool) -> Self {
        Self {
            source_text: source.to_string(),
            source: source.chars().collect(),
            state: TypeState::default(),
            trigger: OneShot::new(),
            play: Play::Idle,
            enabled,
        }
    }

    /// Observe the code window's visibility; arms playback exactly once.
    pub fn observe(&mut self, fraction: f64, now: Instant) {
        if !self.enabled {
            return;
        }
        if self.trigger.observe(fraction, TYPE_THRESHOLD) {
            self.play = Play::Playing { next_due: now };
        }
    }

    /// Advance playback to `now`.
    ///
    /// Characters consumed while inside a tag carry zero delay, so a tag is
    /// typed as a burst within a single update; the burst is bounded by the
    /// remaining source length and never re-queues, which keeps pathological
    /// markup from starving the event loop.
    pub fn update(&mut self, now: Instant) {
        while let Play::Playing { next_due } = self.play {
            if now < next_due {
                break;
            }
            loop {
                match step(&mut self.state, &self.source) {
                    StepOutcome::Exhausted => {
                        self.play = Play::Done;
                        break;
                    }
                    StepOutcome::Buffered => {
                        // Zero-delay while accumulating a tag
                        continue;
                    }
                    StepOutcome::Committed => {
                        // Advance from the previous due time, not from `now`,
                        // so a late frame catches up on all overdue steps
                        self.play = Play::Playing {
                            next_due: next_due + TYPE_STEP,
                        };
                        break;
                    }
                }
            }
        }
    }

    /// Rendered markup for the current frame. Before playback the window is
    /// empty; with the effect disabled the full source shows immediately.
    pub fn rendered(&self) -> &str {
        if !self.enabled {
            return &self.source_text;
        }
        &self.state.output
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.play, Play::Playing { .. })
    }

    pub fn is_done(&self) -> bool {
        matches!(self.play, Play::Done)
    }

    /// Steps consumed so far, one per source character
    pub fn steps_taken(&self) -> usize {
        self.state.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::markup::is_balanced;

    fn run_all(source: &str) -> (Vec<String>, TypeState) {
        let chars: Vec<char> = source.chars().collect();
        let mut state = TypeState::default();
        let mut renders = vec![state.output.clone()];
        loop {
            match step(&mut state, &chars) {
                StepOutcome::Exhausted => break,
                StepOutcome::Committed => renders.push(state.output.clone()),
                StepOutcome::Buffered => {}
            }
        }
        (renders, state)
    }

    #[test]
    fn test_tag_commits_atomically() {
        let (renders, _) = run_all("<b>Hi</b>");
        assert_eq!(renders, vec!["", "<b>", "<b>H", "<b>Hi", "<b>Hi</b>"]);
    }

    #[test]
    fn test_every_render_is_balanced() {
        let source = "<kw>fn</kw> <fn>main</fn>() { <str>\"hi\"</str> }";
        let (renders, _) = run_all(source);
        for render in &renders {
            assert!(is_balanced(render), "unbalanced render {:?}", render);
        }
    }

    #[test]
    fn test_final_output_equals_source() {
        for source in ["<b>Hi</b>", "plain text", "", "a<x>b</x>c<y></y>"] {
            let (renders, state) = run_all(source);
            assert_eq!(state.output, source);
            assert_eq!(renders.last().map(String::as_str), Some(state.output.as_str()));
        }
    }

    #[test]
    fn test_consumes_exactly_len_steps() {
        let source = "<kw>let</kw> x = 1;";
        let chars: Vec<char> = source.chars().collect();
        let mut state = TypeState::default();
        let mut steps = 0;
        while step(&mut state, &chars) != StepOutcome::Exhausted {
            steps += 1;
        }
        assert_eq!(steps, chars.len());
    }

    #[test]
    fn test_paced_playback() {
        let mut tw = Typewriter::new("<b>Hi</b>", true);
        let t0 = Instant::now();

        // Not visible yet: nothing renders
        tw.update(t0);
        assert_eq!(tw.rendered(), "");

        tw.observe(0.6, t0);
        assert!(tw.is_playing());

        // First due step commits the whole <b> tag plus nothing else
        tw.update(t0);
        assert_eq!(tw.rendered(), "<b>");

        // Each 15ms step commits one more plain char; the closing tag rides
        // along with the last one in a zero-delay burst
        tw.update(t0 + Duration::from_millis(15));
        assert_eq!(tw.rendered(), "<b>H");
        tw.update(t0 + Duration::from_millis(30));
        assert_eq!(tw.rendered(), "<b>Hi");
        tw.update(t0 + Duration::from_millis(45));
        assert_eq!(tw.rendered(), "<b>Hi</b>");
        tw.update(t0 + Duration::from_millis(60));
        assert!(tw.is_done());
    }

    #[test]
    fn test_trigger_is_one_shot() {
        let mut tw = Typewriter::new("abc", true);
        let t0 = Instant::now();
        tw.observe(0.6, t0);
        tw.update(t0 + Duration::from_millis(100));
        assert!(tw.is_done());

        // Re-entering the viewport never restarts playback
        tw.observe(0.9, t0 + Duration::from_millis(200));
        assert!(tw.is_done());
        assert_eq!(tw.rendered(), "abc");
    }

    #[test]
    fn test_catch_up_commits_multiple_steps() {
        let mut tw = Typewriter::new("abcdef", true);
        let t0 = Instant::now();
        tw.observe(1.0, t0);
        // A late frame catches up on all due steps
        tw.update(t0 + Duration::from_millis(45));
        assert_eq!(tw.rendered(), "abcd");
    }
}
