//! Page-level UI state owned by the top-level view.

use crate::gallery::Lightbox;
use crate::gate::{Gate, GateState, RevealPlan};
use crate::music::MusicIntent;
use crate::section::{ObserverMessage, SectionId, SectionTracker};

/// Gate, music intent, active section and lightbox in one place.
///
/// Lives only in memory for the lifetime of the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvitationState {
    gate: Gate,
    music: MusicIntent,
    tracker: SectionTracker,
    lightbox: Lightbox,
}

impl InvitationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self) -> GateState {
        self.gate.state()
    }

    pub fn is_locked(&self) -> bool {
        self.gate.is_locked()
    }

    pub fn music(&self) -> MusicIntent {
        self.music
    }

    pub fn music_playing(&self) -> bool {
        self.music.is_playing()
    }

    pub fn active_section(&self) -> SectionId {
        self.tracker.active()
    }

    pub fn tracking_supported(&self) -> bool {
        self.tracker.is_supported()
    }

    pub fn lightbox(&self) -> Option<usize> {
        self.lightbox.current()
    }

    /// Open the invitation. Only the first call has an effect.
    pub fn open(&mut self) -> Option<RevealPlan> {
        let plan = self.gate.open()?;
        if plan.start_music {
            self.music.set(true);
        }
        Some(plan)
    }

    /// Flip the music intent; returns the new value
    pub fn toggle_music(&mut self) -> bool {
        self.music.toggle()
    }

    /// Feed a visibility observer message. Ignored while locked.
    pub fn record_visibility(&mut self, message: &ObserverMessage) -> Option<SectionId> {
        if self.is_locked() {
            return None;
        }
        self.tracker.handle(message)
    }

    /// Enlarge gallery photo `index` out of `len`
    pub fn open_photo(&mut self, index: usize, len: usize) -> bool {
        self.lightbox.open(index, len)
    }

    pub fn close_photo(&mut self) {
        self.lightbox.close();
    }
}
