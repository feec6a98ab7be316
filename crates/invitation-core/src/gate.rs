//! The one-shot cover gate.
//!
//! The page starts `Locked` behind a cover. The first "open" action unlocks
//! it for good and hands back a [`RevealPlan`] describing the side effects
//! the view has to carry out. There is no way back to `Locked`.

use std::time::Duration;

use crate::section::SectionId;

/// Delay before scrolling to the first content section after unlocking.
///
/// Runs concurrently with the cover cross-fade.
pub const REVEAL_SCROLL_DELAY: Duration = Duration::from_millis(1000);

/// Whether the cover gate is shown
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GateState {
    /// Cover is shown, content is hidden
    #[default]
    Locked,
    /// Content is revealed (terminal)
    Unlocked,
}

/// Side effects to perform when the gate opens
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RevealPlan {
    /// Begin background music playback intent
    pub start_music: bool,
    /// Section to scroll to once the delay elapses
    pub scroll_target: SectionId,
    /// How long to wait before scrolling
    pub scroll_delay: Duration,
}

impl Default for RevealPlan {
    fn default() -> Self {
        Self {
            start_music: true,
            scroll_target: SectionId::Opening,
            scroll_delay: REVEAL_SCROLL_DELAY,
        }
    }
}

/// One-shot locked/unlocked gate
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gate {
    state: GateState,
}

impl Gate {
    /// Create a locked gate
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == GateState::Locked
    }

    /// Open the gate.
    ///
    /// Returns the reveal plan on the `Locked -> Unlocked` transition and
    /// `None` on every later call.
    pub fn open(&mut self) -> Option<RevealPlan> {
        match self.state {
            GateState::Locked => {
                self.state = GateState::Unlocked;
                tracing::info!("Invitation gate opened");
                Some(RevealPlan::default())
            }
            GateState::Unlocked => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_locked() {
        let gate = Gate::new();
        assert!(gate.is_locked());
        assert_eq!(gate.state(), GateState::Locked);
    }

    #[test]
    fn first_open_returns_plan() {
        let mut gate = Gate::new();
        let plan = gate.open().expect("first open yields a plan");
        assert!(plan.start_music);
        assert_eq!(plan.scroll_target, SectionId::Opening);
        assert_eq!(plan.scroll_delay, Duration::from_millis(1000));
        assert_eq!(gate.state(), GateState::Unlocked);
    }

    #[test]
    fn later_opens_are_noops() {
        let mut gate = Gate::new();
        gate.open();
        for _ in 0..5 {
            assert!(gate.open().is_none());
            assert!(!gate.is_locked());
        }
    }
}
