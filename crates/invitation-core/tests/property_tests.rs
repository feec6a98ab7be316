//! Property-based tests for page state
//!
//! Uses proptest to verify the gate, music toggle and section tracker
//! invariants over arbitrary event sequences.

use invitation_core::{
    GateState, InvitationState, MusicIntent, ObserverMessage, SectionId, SectionTracker,
    VisibilityEntry,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn section_strategy() -> impl Strategy<Value = SectionId> {
    (0..SectionId::ALL.len()).prop_map(|i| SectionId::ALL[i])
}

fn entry_strategy() -> impl Strategy<Value = VisibilityEntry> {
    (section_strategy(), 0.0f64..=1.0, any::<bool>()).prop_map(|(id, ratio, intersecting)| {
        VisibilityEntry {
            id: id.dom_id().to_string(),
            ratio,
            intersecting,
        }
    })
}

/// User actions on an open page
#[derive(Debug, Clone)]
enum PageOp {
    Open,
    ToggleMusic,
    OpenPhoto(usize),
    ClosePhoto,
}

fn page_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<PageOp>> {
    prop::collection::vec(
        prop_oneof![
            1 => Just(PageOp::Open),
            2 => Just(PageOp::ToggleMusic),
            1 => (0..5usize).prop_map(PageOp::OpenPhoto),
            1 => Just(PageOp::ClosePhoto),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Even numbers of toggles restore the intent, odd numbers flip it
    #[test]
    fn toggle_parity(initial in any::<bool>(), toggles in 0usize..64) {
        let mut music = MusicIntent::new();
        music.set(initial);
        for _ in 0..toggles {
            music.toggle();
        }
        prop_assert_eq!(music.is_playing(), initial ^ (toggles % 2 == 1));
    }

    /// Once unlocked, no sequence of actions re-locks the gate
    #[test]
    fn gate_never_relocks(ops in page_ops_strategy(50)) {
        let mut state = InvitationState::new();
        let mut opened = false;
        for op in ops {
            match op {
                PageOp::Open => {
                    let plan = state.open();
                    prop_assert_eq!(plan.is_some(), !opened);
                    opened = true;
                }
                PageOp::ToggleMusic => { state.toggle_music(); }
                PageOp::OpenPhoto(i) => { state.open_photo(i, 3); }
                PageOp::ClosePhoto => state.close_photo(),
            }
            let expected = if opened { GateState::Unlocked } else { GateState::Locked };
            prop_assert_eq!(state.gate(), expected);
        }
    }

    /// Lightbox actions never change gate or music state
    #[test]
    fn lightbox_is_isolated(index in 0usize..6, open_first in any::<bool>()) {
        let mut state = InvitationState::new();
        if open_first {
            state.open();
        }
        let before = (state.gate(), state.music_playing());
        state.open_photo(index, 3);
        prop_assert_eq!(state.lightbox().is_some(), index < 3);
        state.close_photo();
        prop_assert_eq!((state.gate(), state.music_playing()), before);
    }

    /// The active section is always the last entry that met the threshold
    #[test]
    fn tracker_last_qualifying_entry_wins(entries in prop::collection::vec(entry_strategy(), 0..40)) {
        let mut tracker = SectionTracker::default();
        let mut expected = SectionId::Hero;
        for entry in &entries {
            tracker.handle(&ObserverMessage::Entry(entry.clone()));
            if entry.intersecting && entry.ratio >= 0.3 {
                expected = entry.id.parse().unwrap();
            }
        }
        prop_assert_eq!(tracker.active(), expected);
    }
}
