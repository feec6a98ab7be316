//! Page sections and the visibility-driven active-section tracker.
//!
//! The webview reports per-section visibility ratios as JSON messages
//! (see [`ObserverMessage`]). [`SectionTracker`] turns them into a single
//! "active" section: whichever section most recently crossed the visibility
//! threshold while entering the viewport.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minimum visible fraction for a section to become active
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

/// Fixed content regions of the page, in document order
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    /// The locked cover
    #[default]
    Hero,
    /// Religious opening
    Opening,
    /// Bride and groom introduction
    Couple,
    /// Marriage ceremony details
    Akad,
    /// Reception details
    Reception,
    /// Family closing remarks
    Closing,
    /// Photo gallery
    Gallery,
    /// Guest list
    Invitees,
    /// Map location
    Location,
}

impl SectionId {
    /// Every section in document order
    pub const ALL: [SectionId; 9] = [
        SectionId::Hero,
        SectionId::Opening,
        SectionId::Couple,
        SectionId::Akad,
        SectionId::Reception,
        SectionId::Closing,
        SectionId::Gallery,
        SectionId::Invitees,
        SectionId::Location,
    ];

    /// Sections revealed after the gate opens
    pub fn content() -> impl Iterator<Item = SectionId> {
        Self::ALL.into_iter().filter(|id| *id != SectionId::Hero)
    }

    /// Stable DOM element id
    pub fn dom_id(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Opening => "opening",
            SectionId::Couple => "couple",
            SectionId::Akad => "akad",
            SectionId::Reception => "reception",
            SectionId::Closing => "closing",
            SectionId::Gallery => "gallery",
            SectionId::Invitees => "invitees",
            SectionId::Location => "location",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// Error returned when parsing an unknown section id
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.dom_id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// A message posted by the webview visibility observer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObserverMessage {
    /// One region's visibility changed
    Entry(VisibilityEntry),
    /// The environment cannot observe visibility
    Unsupported,
}

/// Visibility of one region relative to the viewport
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisibilityEntry {
    /// DOM id of the observed region
    pub id: String,
    /// Visible fraction, 0.0 - 1.0
    pub ratio: f64,
    /// Whether the region is entering (or inside) the viewport
    pub intersecting: bool,
}

/// Tracks which section currently occupies a significant part of the viewport
#[derive(Clone, Debug, PartialEq)]
pub struct SectionTracker {
    threshold: f64,
    active: SectionId,
    supported: bool,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD)
    }
}

impl SectionTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            active: SectionId::Hero,
            supported: true,
        }
    }

    /// The most recently activated section
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Whether active-section reporting is available
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Stop reporting; used when the environment cannot observe visibility.
    pub fn mark_unsupported(&mut self) {
        if self.supported {
            tracing::warn!("Visibility observation unsupported, active section tracking disabled");
        }
        self.supported = false;
    }

    /// Feed one visibility entry.
    ///
    /// Returns the newly active section if the entry changed it. Entries
    /// for unknown regions, leaving regions, and ratios under the threshold
    /// are ignored.
    pub fn observe(&mut self, entry: &VisibilityEntry) -> Option<SectionId> {
        if !self.supported || !entry.intersecting || entry.ratio < self.threshold {
            return None;
        }
        let id = entry.id.parse::<SectionId>().ok()?;
        if id == self.active {
            return None;
        }
        tracing::debug!(section = %id, ratio = entry.ratio, "Active section changed");
        self.active = id;
        Some(id)
    }

    /// Apply a raw observer message
    pub fn handle(&mut self, message: &ObserverMessage) -> Option<SectionId> {
        match message {
            ObserverMessage::Entry(entry) => self.observe(entry),
            ObserverMessage::Unsupported => {
                self.mark_unsupported();
                None
            }
        }
    }
}
