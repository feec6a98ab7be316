//! Wedding Invitation Core Library
//!
//! Framework-independent logic behind the single-page wedding invitation.
//!
//! ## Overview
//!
//! The page starts behind a locked cover. Opening it reveals a sequence of
//! sections (religious opening, couple, ceremony, reception, family closing,
//! gallery, guest list, map) and starts a looping background track. While
//! the guest scrolls, a visibility tracker reports the active section.
//!
//! This crate holds the parts of that which are not markup:
//!
//! - [`gate`]: the one-shot locked/unlocked cover gate
//! - [`music`]: the user's playback intent
//! - [`section`]: section ids and the active-section tracker
//! - [`audio`]: the audio adapter and its backend seam
//! - [`state`]: the page state object tying the above together
//! - [`content`], [`assets`], [`config`]: what to show and where it lives
//!
//! ## Quick Start
//!
//! ```
//! use invitation_core::{InvitationState, SectionId};
//!
//! let mut state = InvitationState::new();
//! assert!(state.is_locked());
//!
//! let plan = state.open().expect("first open reveals the page");
//! assert_eq!(plan.scroll_target, SectionId::Opening);
//! assert!(state.music_playing());
//!
//! // Opening again changes nothing
//! assert!(state.open().is_none());
//! ```

pub mod assets;
pub mod audio;
pub mod config;
pub mod content;
pub mod error;
pub mod gallery;
pub mod gate;
pub mod motion;
pub mod music;
pub mod section;
pub mod state;

// Re-exports
pub use assets::AssetStore;
pub use audio::{AudioAdapter, AudioBackend, AudioError, AudioOptions, AudioStatus, AudioTrack, LoadRequest};
pub use config::{ConfigOverrides, InvitationConfig};
pub use content::InvitationContent;
pub use error::{InvitationError, InvitationResult};
pub use gallery::Lightbox;
pub use gate::{Gate, GateState, RevealPlan};
pub use motion::{Motion, Transition};
pub use music::MusicIntent;
pub use section::{ObserverMessage, SectionId, SectionTracker, VisibilityEntry};
pub use state::InvitationState;
