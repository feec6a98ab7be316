//! Background music playback intent.

/// The user's desired playback state.
///
/// This is intent only. Whether sound is actually produced depends on the
/// audio adapter having finished loading.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MusicIntent {
    playing: bool,
}

impl MusicIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn set(&mut self, playing: bool) {
        if self.playing != playing {
            tracing::debug!(playing, "Music intent changed");
        }
        self.playing = playing;
    }

    /// Flip the intent and return the new value
    pub fn toggle(&mut self) -> bool {
        self.set(!self.playing);
        self.playing
    }

    /// Accessible label for the floating toggle
    pub fn toggle_label(&self) -> &'static str {
        if self.playing {
            "Mute music"
        } else {
            "Play music"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_paused() {
        assert!(!MusicIntent::new().is_playing());
    }

    #[test]
    fn toggle_flips_and_returns_new_value() {
        let mut music = MusicIntent::new();
        assert!(music.toggle());
        assert!(!music.toggle());
    }

    #[test]
    fn label_follows_state() {
        let mut music = MusicIntent::new();
        assert_eq!(music.toggle_label(), "Play music");
        music.set(true);
        assert_eq!(music.toggle_label(), "Mute music");
    }
}
