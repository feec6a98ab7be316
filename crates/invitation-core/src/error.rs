//! Error types for the wedding invitation

use thiserror::Error;

use crate::audio::AudioError;

/// Main error type for invitation operations
#[derive(Error, Debug)]
pub enum InvitationError {
    /// Static asset could not be found under the asset directory
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// Content file failed validation
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Audio playback error
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using InvitationError
pub type InvitationResult<T> = Result<T, InvitationError>;
