//! Transition timings and motion presets.
//!
//! Every animation on the page is a CSS keyframe animation selected by a
//! [`Motion`] class, timed by a [`Transition`] rendered as inline style.

use std::time::Duration;

/// Cover fade-out and scale-up on unlock
pub const COVER_EXIT: Transition = Transition::new(800, 0);
/// Cover title entrance
pub const COVER_TITLE: Transition = Transition::new(600, 300);
/// Whole content block fade-in after unlock
pub const CONTENT_REVEAL: Transition = Transition::new(1000, 500);
/// Floating music toggle entrance
pub const MUSIC_TOGGLE: Transition = Transition::new(400, 1000);
/// Section entrance when scrolled into view
pub const SECTION_ENTER: Transition = Transition::new(800, 0);
/// Secondary paragraph fade inside a section
pub const PARAGRAPH_ENTER: Transition = Transition::new(1000, 500);
/// First column of a two-column section
pub const COLUMN_ENTER: Transition = Transition::new(800, 300);
/// Second column, staggered after the first
pub const COLUMN_ENTER_LATE: Transition = Transition::new(800, 500);

/// Entrance timing for the `index`-th column of a multi-column section.
///
/// The first column uses [`COLUMN_ENTER`]; later ones are staggered.
pub fn column_enter(index: usize) -> Transition {
    if index == 0 {
        COLUMN_ENTER
    } else {
        COLUMN_ENTER_LATE
    }
}

/// Duration and delay of one animation
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Transition {
    duration_ms: u64,
    delay_ms: u64,
}

impl Transition {
    pub const fn new(duration_ms: u64, delay_ms: u64) -> Self {
        Self {
            duration_ms,
            delay_ms,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Time until the animation has finished
    pub fn total(&self) -> Duration {
        self.duration() + self.delay()
    }

    /// Inline CSS applying this timing
    pub fn css(&self) -> String {
        format!(
            "animation-duration: {}ms; animation-delay: {}ms;",
            self.duration_ms, self.delay_ms
        )
    }
}

/// Named animation presets
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Motion {
    /// Fade in while rising 50px
    #[default]
    FadeUp,
    /// Plain opacity fade
    FadeIn,
    /// Fade in from 30px to the left
    SlideFromLeft,
    /// Fade in from 30px to the right
    SlideFromRight,
    /// Fade in while rising 20px
    Rise,
    /// Fade out while scaling to 1.1
    ExitZoom,
}

impl Motion {
    /// Returns the CSS class for this preset
    pub fn class(&self) -> &'static str {
        match self {
            Motion::FadeUp => "motion-fade-up",
            Motion::FadeIn => "motion-fade-in",
            Motion::SlideFromLeft => "motion-slide-left",
            Motion::SlideFromRight => "motion-slide-right",
            Motion::Rise => "motion-rise",
            Motion::ExitZoom => "motion-exit-zoom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_renders_milliseconds() {
        assert_eq!(
            CONTENT_REVEAL.css(),
            "animation-duration: 1000ms; animation-delay: 500ms;"
        );
    }

    #[test]
    fn total_adds_delay() {
        assert_eq!(MUSIC_TOGGLE.total(), Duration::from_millis(1400));
    }

    #[test]
    fn cover_exit_fits_inside_scroll_delay() {
        assert!(COVER_EXIT.total() <= crate::gate::REVEAL_SCROLL_DELAY);
    }

    #[test]
    fn columns_are_staggered() {
        assert_eq!(column_enter(0), COLUMN_ENTER);
        assert_eq!(column_enter(1), COLUMN_ENTER_LATE);
        assert!(column_enter(1).delay() > column_enter(0).delay());
    }

    #[test]
    fn motion_classes() {
        assert_eq!(Motion::default().class(), "motion-fade-up");
        assert_eq!(Motion::ExitZoom.class(), "motion-exit-zoom");
    }
}
