//! Background audio playback.
//!
//! [`AudioAdapter`] wraps one audio resource and exposes play/pause/stop,
//! mute and volume controls plus a [`AudioStatus`] snapshot. The platform
//! sound output sits behind the [`AudioBackend`] / [`AudioTrack`] traits so
//! the adapter can be driven by a fake in tests and by rodio in the app.
//!
//! ## Loading
//!
//! Loading is split in two halves so no blocking work lands on the UI
//! thread:
//!
//! ```text
//! begin_load()  ──► LoadRequest ──► fetch_source() (blocking pool)
//!                                          │
//! complete_load(generation, bytes) ◄───────┘  (back on the UI thread)
//! ```
//!
//! Every request carries a generation number. `release` and `reload` bump
//! the generation, so a completion that arrives after teardown is dropped
//! without ever creating a track.

mod adapter;
mod source;

#[cfg(feature = "playback")]
mod rodio_backend;

use std::path::PathBuf;

use thiserror::Error;

pub use adapter::{AudioAdapter, LoadRequest};
pub use source::{fetch_source, is_supported_format, SUPPORTED_EXTENSIONS};

#[cfg(feature = "playback")]
pub use rodio_backend::{RodioBackend, RodioTrack};

/// Audio loading and playback errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// None of the configured sources could be read
    #[error("No playable audio source")]
    NoPlayableSource,

    /// Reading the source failed
    #[error("Audio source error: {0}")]
    Source(String),

    /// The source could not be decoded
    #[error("Decoding error: {0}")]
    Decode(String),

    /// No usable output device
    #[error("Audio output device error: {0}")]
    Device(String),

    /// The background load task did not finish
    #[error("Load task failed: {0}")]
    Task(String),
}

/// Configuration of one audio resource
#[derive(Debug, Clone, PartialEq)]
pub struct AudioOptions {
    /// Candidate files, tried in order
    pub sources: Vec<PathBuf>,
    /// Decode incrementally instead of buffering the whole track
    pub stream: bool,
    /// Restart from the beginning when the track ends
    pub looping: bool,
    /// Initial volume, 0.0 - 1.0
    pub volume: f32,
    /// Start loading immediately rather than on first play
    pub preload: bool,
    /// Play as soon as loading completes
    pub autoplay: bool,
}

impl Default for AudioOptions {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            stream: false,
            looping: false,
            volume: 1.0,
            preload: true,
            autoplay: false,
        }
    }
}

impl AudioOptions {
    /// Options for a single source with the remaining fields defaulted
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            sources: vec![source.into()],
            ..Self::default()
        }
    }
}

/// Observable adapter status.
///
/// At most one flag is set at a time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AudioStatus {
    /// Audio is producing sound
    pub playing: bool,
    /// Load has not completed or failed yet
    pub loading: bool,
    /// Load failed; playback is unavailable for this instance
    pub error: bool,
}

impl Default for AudioStatus {
    fn default() -> Self {
        Self {
            playing: false,
            loading: true,
            error: false,
        }
    }
}

/// A loaded, controllable sound
pub trait AudioTrack {
    fn play(&mut self);
    fn pause(&mut self);
    /// Halt playback and rewind to the start
    fn stop(&mut self);
    fn set_muted(&mut self, muted: bool);
    fn set_volume(&mut self, volume: f32);
    /// Whether a non-looping track has played to the end
    fn is_finished(&self) -> bool;
}

/// Turns fetched bytes into a playable track.
///
/// Called on the UI thread; implementations may hold thread-bound output
/// handles.
pub trait AudioBackend {
    type Track: AudioTrack;

    fn open(&mut self, data: Vec<u8>, options: &AudioOptions) -> Result<Self::Track, AudioError>;
}
