//! Launch configuration.

use std::path::PathBuf;

use crate::assets::AssetStore;
use crate::audio::AudioOptions;
use crate::content::InvitationContent;

/// Everything the app needs at launch
#[derive(Debug, Clone, PartialEq)]
pub struct InvitationConfig {
    pub assets: AssetStore,
    pub content: InvitationContent,
    pub audio: AudioOptions,
    /// Whether background music is enabled at all
    pub music_enabled: bool,
}

/// Overrides from the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Replaces the content's music volume
    pub volume: Option<f32>,
    /// Disables background music entirely
    pub no_music: bool,
}

impl InvitationConfig {
    /// Assemble the configuration.
    ///
    /// Music sources are resolved against the asset directory. The track
    /// loops, is streamed and preloads, matching a background soundtrack.
    pub fn new(asset_dir: impl Into<PathBuf>, content: InvitationContent, overrides: ConfigOverrides) -> Self {
        let assets = AssetStore::new(asset_dir);
        let volume = overrides
            .volume
            .unwrap_or(content.music.volume)
            .clamp(0.0, 1.0);

        let audio = AudioOptions {
            sources: content.music.sources.iter().map(|s| assets.resolve(s)).collect(),
            stream: true,
            looping: true,
            volume,
            preload: true,
            autoplay: false,
        };

        Self {
            assets,
            content,
            audio,
            music_enabled: !overrides.no_music,
        }
    }
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self::new("assets", InvitationContent::default(), ConfigOverrides::default())
    }
}
