//! Rotating hero presenter: a bounded slide index advanced by timer or user
//! navigation, kept valid across slide-sequence changes.

use serde::{Deserialize, Serialize};

/// Auto-advance interval for the hero rotation, in milliseconds.
pub const HERO_ROTATION_INTERVAL_MS: u64 = 4000;

/// One entry in the hero's ordered, displayable slide sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Image URL. Required; a slide with a blank image is not presentable.
    pub image: String,
    /// Main heading. Required; a slide with a blank heading is not presentable.
    pub heading: String,
    /// Optional kicker line above the heading.
    pub subheading: Option<String>,
    /// Optional supporting copy below the heading.
    pub description: Option<String>,
}

impl Slide {
    /// Whether this slide carries the fields required to render it.
    pub fn is_presentable(&self) -> bool {
        !self.image.trim().is_empty() && !self.heading.trim().is_empty()
    }
}

/// Drops slides that lack a usable image or heading.
pub fn presentable_slides(slides: Vec<Slide>) -> Vec<Slide> {
    slides
        .into_iter()
        .filter(Slide::is_presentable)
        .collect()
}

/// Presenter state: either empty (nothing renders) or showing exactly one
/// slide of a non-empty sequence.
///
/// Fields stay private so `current` can never leave the valid range; every
/// transition goes through [`reduce_hero`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeroState {
    slides: Vec<Slide>,
    sequence_key: Option<String>,
    current: usize,
}

impl HeroState {
    /// The resolved slide sequence.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of presentable slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// True when no valid slide exists and nothing should render.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the current slide, when showing.
    pub fn current_index(&self) -> Option<usize> {
        (!self.slides.is_empty()).then_some(self.current)
    }

    /// The current slide, when showing.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    /// Whether the auto-advance timer should be running. No tick is
    /// scheduled for zero or one slide.
    pub fn timer_enabled(&self) -> bool {
        self.slides.len() > 1
    }
}

/// Events accepted by [`reduce_hero`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroAction {
    /// A slide sequence resolved from its source. Non-presentable slides are
    /// dropped at this boundary. The index resets to 0 when `sequence_key`
    /// differs from the previous sequence's key, and whenever the kept index
    /// would fall out of bounds of the new sequence.
    SlidesResolved {
        /// Stable identity of the sequence's subject (for example a trip slug).
        sequence_key: String,
        /// The resolved slides, not yet filtered.
        slides: Vec<Slide>,
    },
    /// Recurring timer tick.
    Tick,
    /// Explicit advance to the next slide, wrapping.
    Next,
    /// Explicit step to the previous slide, wrapping.
    Prev,
    /// Jump directly to an index. Out-of-range targets are ignored; they can
    /// only arise from stale callers and must not disturb the presenter.
    JumpTo(usize),
}

/// Applies a [`HeroAction`] to the presenter state.
///
/// Total over all inputs: navigation on an empty sequence and out-of-range
/// jumps are silent no-ops.
pub fn reduce_hero(state: &mut HeroState, action: HeroAction) {
    match action {
        HeroAction::SlidesResolved {
            sequence_key,
            slides,
        } => {
            let slides = presentable_slides(slides);
            let same_sequence = state.sequence_key.as_deref() == Some(sequence_key.as_str());
            state.sequence_key = Some(sequence_key);
            state.slides = slides;
            if !same_sequence || state.current >= state.slides.len() {
                state.current = 0;
            }
        }
        HeroAction::Tick | HeroAction::Next => {
            if !state.slides.is_empty() {
                state.current = (state.current + 1) % state.slides.len();
            }
        }
        HeroAction::Prev => {
            if !state.slides.is_empty() {
                state.current = (state.current + state.slides.len() - 1) % state.slides.len();
            }
        }
        HeroAction::JumpTo(index) => {
            if index < state.slides.len() {
                state.current = index;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn slide(n: usize) -> Slide {
        Slide {
            image: format!("https://img.example/{n}.webp"),
            heading: format!("Slide {n}"),
            subheading: None,
            description: None,
        }
    }

    fn resolved(state: &mut HeroState, key: &str, count: usize) {
        reduce_hero(
            state,
            HeroAction::SlidesResolved {
                sequence_key: key.to_string(),
                slides: (0..count).map(slide).collect(),
            },
        );
    }

    #[test]
    fn next_cycles_back_to_start_after_full_round() {
        let mut state = HeroState::default();
        resolved(&mut state, "kyoto", 3);
        assert_eq!(state.current_index(), Some(0));

        for _ in 0..3 {
            reduce_hero(&mut state, HeroAction::Next);
        }
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn prev_wraps_to_last_slide() {
        let mut state = HeroState::default();
        resolved(&mut state, "kyoto", 3);
        reduce_hero(&mut state, HeroAction::Prev);
        assert_eq!(state.current_index(), Some(2));
    }

    #[test]
    fn single_slide_disables_timer_and_ignores_navigation() {
        let mut state = HeroState::default();
        resolved(&mut state, "kyoto", 1);

        assert!(!state.timer_enabled());
        reduce_hero(&mut state, HeroAction::Next);
        reduce_hero(&mut state, HeroAction::Prev);
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn shrinking_sequence_clamps_index_and_disables_timer() {
        let mut state = HeroState::default();
        resolved(&mut state, "kyoto", 3);
        reduce_hero(&mut state, HeroAction::JumpTo(2));
        assert_eq!(state.current_index(), Some(2));

        resolved(&mut state, "kyoto", 1);
        assert_eq!(state.current_index(), Some(0));
        assert!(!state.timer_enabled());
    }

    #[test]
    fn same_sequence_with_valid_index_keeps_position() {
        let mut state = HeroState::default();
        resolved(&mut state, "kyoto", 3);
        reduce_hero(&mut state, HeroAction::Next);

        resolved(&mut state, "kyoto", 3);
        assert_eq!(state.current_index(), Some(1));
    }

    #[test]
    fn new_sequence_identity_resets_index() {
        let mut state = HeroState::default();
        resolved(&mut state, "kyoto", 3);
        reduce_hero(&mut state, HeroAction::JumpTo(2));

        resolved(&mut state, "oslo", 3);
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn empty_sequence_renders_nothing_and_ignores_all_navigation() {
        let mut state = HeroState::default();
        resolved(&mut state, "kyoto", 0);

        assert!(state.is_empty());
        assert_eq!(state.current_index(), None);
        assert_eq!(state.current_slide(), None);

        for action in [
            HeroAction::Tick,
            HeroAction::Next,
            HeroAction::Prev,
            HeroAction::JumpTo(0),
        ] {
            reduce_hero(&mut state, action);
            assert_eq!(state.current_index(), None);
        }
    }

    #[test]
    fn out_of_range_jump_is_ignored() {
        let mut state = HeroState::default();
        resolved(&mut state, "kyoto", 2);
        reduce_hero(&mut state, HeroAction::JumpTo(5));
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn non_presentable_slides_are_dropped_at_resolution() {
        let mut state = HeroState::default();
        reduce_hero(
            &mut state,
            HeroAction::SlidesResolved {
                sequence_key: "kyoto".to_string(),
                slides: vec![
                    Slide {
                        image: "  ".to_string(),
                        heading: "Blank image".to_string(),
                        subheading: None,
                        description: None,
                    },
                    slide(1),
                    Slide {
                        image: "https://img.example/2.webp".to_string(),
                        heading: String::new(),
                        subheading: None,
                        description: None,
                    },
                ],
            },
        );

        assert_eq!(state.len(), 1);
        assert_eq!(state.current_slide().map(|s| s.heading.as_str()), Some("Slide 1"));
    }
}
