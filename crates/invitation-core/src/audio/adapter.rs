//! Audio adapter: one resource, imperative controls, observable status.

use std::path::PathBuf;

use super::{AudioBackend, AudioError, AudioOptions, AudioStatus, AudioTrack};

/// A pending load handed out by [`AudioAdapter::begin_load`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Must be passed back to [`AudioAdapter::complete_load`]
    pub generation: u64,
    /// Candidate files, tried in order
    pub sources: Vec<PathBuf>,
}

/// Wraps a single audio resource.
///
/// All methods are called from the UI thread. Load completion is delivered
/// by the owner through [`complete_load`](Self::complete_load).
pub struct AudioAdapter<B: AudioBackend> {
    backend: B,
    options: AudioOptions,
    track: Option<B::Track>,
    status: AudioStatus,
    generation: u64,
    in_flight: bool,
    released: bool,
    wants_playback: bool,
    muted: bool,
    volume: f32,
}

impl<B: AudioBackend> AudioAdapter<B> {
    /// Create an adapter in the `loading` state. No I/O happens until
    /// [`begin_load`](Self::begin_load).
    pub fn new(backend: B, options: AudioOptions) -> Self {
        let volume = options.volume.clamp(0.0, 1.0);
        let wants_playback = options.autoplay;
        Self {
            backend,
            options,
            track: None,
            status: AudioStatus::default(),
            generation: 0,
            in_flight: false,
            released: false,
            wants_playback,
            muted: false,
            volume,
        }
    }

    pub fn status(&self) -> AudioStatus {
        self.status
    }

    pub fn options(&self) -> &AudioOptions {
        &self.options
    }

    pub fn is_loaded(&self) -> bool {
        self.track.is_some()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Whether playback has been requested (possibly before load finished)
    pub fn wants_playback(&self) -> bool {
        self.wants_playback
    }

    /// Whether a load should be started now
    pub fn needs_load(&self) -> bool {
        !self.released && !self.in_flight && self.track.is_none() && !self.status.error
    }

    /// Start loading the resource.
    ///
    /// Returns `None` if a load is already in flight, the track is loaded,
    /// the previous load failed, or the adapter was released.
    pub fn begin_load(&mut self) -> Option<LoadRequest> {
        if !self.needs_load() {
            return None;
        }
        self.in_flight = true;
        self.generation += 1;
        tracing::debug!(generation = self.generation, "Beginning audio load");
        Some(LoadRequest {
            generation: self.generation,
            sources: self.options.sources.clone(),
        })
    }

    /// Deliver the result of a load started by [`begin_load`](Self::begin_load).
    ///
    /// Stale completions (from before a `release` or `reload`) are dropped
    /// and `false` is returned.
    pub fn complete_load(&mut self, generation: u64, result: Result<Vec<u8>, AudioError>) -> bool {
        if !self.in_flight || generation != self.generation {
            tracing::debug!(generation, current = self.generation, "Discarding stale audio load");
            return false;
        }
        self.in_flight = false;

        match result.and_then(|data| self.backend.open(data, &self.options)) {
            Ok(mut track) => {
                track.set_volume(self.volume);
                track.set_muted(self.muted);
                self.track = Some(track);
                self.status.loading = false;
                tracing::info!("Audio loaded");
                if self.wants_playback {
                    self.play();
                }
            }
            Err(e) => {
                tracing::warn!("Audio load failed: {}", e);
                self.status = AudioStatus {
                    playing: false,
                    loading: false,
                    error: true,
                };
            }
        }
        true
    }

    /// Start playback. No-op if already playing or not yet loaded.
    ///
    /// A track that already played to its end starts over from the beginning.
    pub fn play(&mut self) {
        if self.status.playing {
            return;
        }
        if let Some(track) = self.track.as_mut() {
            if track.is_finished() {
                track.stop();
            }
            track.play();
            self.status.playing = true;
        }
    }

    /// Pause playback. No-op if not playing.
    pub fn pause(&mut self) {
        if !self.status.playing {
            return;
        }
        if let Some(track) = self.track.as_mut() {
            track.pause();
        }
        self.status.playing = false;
    }

    /// Halt and rewind
    pub fn stop(&mut self) {
        if let Some(track) = self.track.as_mut() {
            track.stop();
            self.status.playing = false;
        }
    }

    pub fn mute(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(track) = self.track.as_mut() {
            track.set_muted(muted);
        }
    }

    /// Set volume, clamped to 0.0 - 1.0
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };
        if let Some(track) = self.track.as_mut() {
            track.set_volume(self.volume);
        }
    }

    /// Record the desired playback state and apply it if loaded.
    ///
    /// A `true` intent recorded while loading starts playback once the load
    /// completes, unless it is withdrawn first.
    pub fn set_playback_intent(&mut self, playing: bool) {
        self.wants_playback = playing;
        if playing {
            self.play();
        } else {
            self.pause();
        }
    }

    /// Record the desired playback state and hand back a load request when
    /// playing is wanted but nothing is loaded yet (`preload: false`).
    pub fn request_playback(&mut self, playing: bool) -> Option<LoadRequest> {
        self.set_playback_intent(playing);
        if playing {
            self.begin_load()
        } else {
            None
        }
    }

    /// Whether a non-looping track played to its end while marked playing
    pub fn has_ended(&self) -> bool {
        self.status.playing
            && !self.options.looping
            && self.track.as_ref().is_some_and(|t| t.is_finished())
    }

    /// Pick up the end of a non-looping track. Returns `true` if the status
    /// changed.
    pub fn refresh(&mut self) -> bool {
        let ended = self.has_ended();
        if ended {
            self.status.playing = false;
        }
        ended
    }

    /// Swap in a new source configuration.
    ///
    /// Releases the current resource first. Returns a load request when the
    /// new options ask for preloading.
    pub fn reload(&mut self, options: AudioOptions) -> Option<LoadRequest> {
        self.release();
        self.released = false;
        self.volume = options.volume.clamp(0.0, 1.0);
        self.wants_playback |= options.autoplay;
        self.options = options;
        self.status = AudioStatus::default();
        if self.options.preload {
            self.begin_load()
        } else {
            None
        }
    }

    /// Release the underlying resource and invalidate any pending load.
    pub fn release(&mut self) {
        if let Some(mut track) = self.track.take() {
            track.stop();
            tracing::debug!("Audio track released");
        }
        self.generation += 1;
        self.in_flight = false;
        self.released = true;
        self.status.playing = false;
    }
}

impl<B: AudioBackend> Drop for AudioAdapter<B> {
    fn drop(&mut self) {
        if let Some(mut track) = self.track.take() {
            track.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Opened(usize),
        Play,
        Pause,
        Stop,
        Muted(bool),
        Volume(f32),
    }

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<Event>>>);

    impl Recorder {
        fn push(&self, event: Event) {
            self.0.borrow_mut().push(event);
        }

        fn events(&self) -> Vec<Event> {
            self.0.borrow().clone()
        }

        fn count(&self, event: &Event) -> usize {
            self.0.borrow().iter().filter(|e| *e == event).count()
        }
    }

    struct FakeTrack {
        recorder: Recorder,
        finished: Rc<RefCell<bool>>,
    }

    impl AudioTrack for FakeTrack {
        fn play(&mut self) {
            self.recorder.push(Event::Play);
        }
        fn pause(&mut self) {
            self.recorder.push(Event::Pause);
        }
        fn stop(&mut self) {
            self.recorder.push(Event::Stop);
            *self.finished.borrow_mut() = false;
        }
        fn set_muted(&mut self, muted: bool) {
            self.recorder.push(Event::Muted(muted));
        }
        fn set_volume(&mut self, volume: f32) {
            self.recorder.push(Event::Volume(volume));
        }
        fn is_finished(&self) -> bool {
            *self.finished.borrow()
        }
    }

    #[derive(Default)]
    struct FakeBackend {
        recorder: Recorder,
        finished: Rc<RefCell<bool>>,
    }

    impl AudioBackend for FakeBackend {
        type Track = FakeTrack;

        fn open(&mut self, data: Vec<u8>, _options: &AudioOptions) -> Result<FakeTrack, AudioError> {
            if data.is_empty() {
                return Err(AudioError::Decode("empty".to_string()));
            }
            self.recorder.push(Event::Opened(data.len()));
            Ok(FakeTrack {
                recorder: self.recorder.clone(),
                finished: Rc::clone(&self.finished),
            })
        }
    }

    fn adapter(options: AudioOptions) -> (AudioAdapter<FakeBackend>, Recorder) {
        let backend = FakeBackend::default();
        let recorder = backend.recorder.clone();
        (AudioAdapter::new(backend, options), recorder)
    }

    fn loaded(options: AudioOptions) -> (AudioAdapter<FakeBackend>, Recorder) {
        let (mut audio, recorder) = adapter(options);
        let request = audio.begin_load().unwrap();
        assert!(audio.complete_load(request.generation, Ok(vec![1, 2, 3])));
        (audio, recorder)
    }

    #[test]
    fn starts_loading() {
        let (audio, _) = adapter(AudioOptions::new("song.mp3"));
        let status = audio.status();
        assert!(status.loading);
        assert!(!status.playing);
        assert!(!status.error);
    }

    #[test]
    fn play_before_load_is_noop() {
        let (mut audio, recorder) = adapter(AudioOptions::new("song.mp3"));
        audio.play();
        assert!(!audio.status().playing);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn load_applies_volume_and_mute() {
        let (audio, recorder) = loaded(AudioOptions {
            volume: 0.5,
            ..AudioOptions::new("song.mp3")
        });
        assert!(!audio.status().loading);
        assert_eq!(
            recorder.events(),
            vec![Event::Opened(3), Event::Volume(0.5), Event::Muted(false)]
        );
    }

    #[test]
    fn play_is_idempotent() {
        let (mut audio, recorder) = loaded(AudioOptions::new("song.mp3"));
        audio.play();
        audio.play();
        assert!(audio.status().playing);
        assert_eq!(recorder.count(&Event::Play), 1);
    }

    #[test]
    fn pause_when_not_playing_is_noop() {
        let (mut audio, recorder) = loaded(AudioOptions::new("song.mp3"));
        audio.pause();
        assert_eq!(recorder.count(&Event::Pause), 0);
        audio.play();
        audio.pause();
        assert_eq!(recorder.count(&Event::Pause), 1);
        assert!(!audio.status().playing);
    }

    #[test]
    fn stop_clears_playing() {
        let (mut audio, recorder) = loaded(AudioOptions::new("song.mp3"));
        audio.play();
        audio.stop();
        assert!(!audio.status().playing);
        assert_eq!(recorder.count(&Event::Stop), 1);
    }

    #[test]
    fn intent_during_load_plays_on_completion() {
        let (mut audio, recorder) = adapter(AudioOptions::new("song.mp3"));
        let request = audio.begin_load().unwrap();
        audio.set_playback_intent(true);
        assert!(!audio.status().playing);
        audio.complete_load(request.generation, Ok(vec![0; 8]));
        assert!(audio.status().playing);
        assert_eq!(recorder.count(&Event::Play), 1);
    }

    #[test]
    fn withdrawn_intent_does_not_play() {
        let (mut audio, recorder) = adapter(AudioOptions::new("song.mp3"));
        let request = audio.begin_load().unwrap();
        audio.set_playback_intent(true);
        audio.set_playback_intent(false);
        audio.complete_load(request.generation, Ok(vec![0; 8]));
        assert!(!audio.status().playing);
        assert_eq!(recorder.count(&Event::Play), 0);
    }

    #[test]
    fn autoplay_plays_after_load() {
        let (audio, _) = loaded(AudioOptions {
            autoplay: true,
            ..AudioOptions::new("song.mp3")
        });
        assert!(audio.status().playing);
    }

    #[test]
    fn load_error_is_permanent() {
        let (mut audio, _) = adapter(AudioOptions::new("missing.mp3"));
        let request = audio.begin_load().unwrap();
        audio.complete_load(request.generation, Err(AudioError::NoPlayableSource));
        let status = audio.status();
        assert!(status.error);
        assert!(!status.loading);

        audio.set_playback_intent(true);
        audio.play();
        assert!(!audio.status().playing);
        assert!(audio.begin_load().is_none());
    }

    #[test]
    fn decode_error_sets_error() {
        let (mut audio, _) = adapter(AudioOptions::new("song.mp3"));
        let request = audio.begin_load().unwrap();
        audio.complete_load(request.generation, Ok(Vec::new()));
        assert!(audio.status().error);
    }

    #[test]
    fn only_one_load_in_flight() {
        let (mut audio, _) = adapter(AudioOptions::new("song.mp3"));
        assert!(audio.begin_load().is_some());
        assert!(audio.begin_load().is_none());
    }

    #[test]
    fn release_discards_pending_load() {
        let (mut audio, recorder) = adapter(AudioOptions::new("song.mp3"));
        let request = audio.begin_load().unwrap();
        audio.release();
        assert!(!audio.complete_load(request.generation, Ok(vec![1])));
        assert!(!audio.is_loaded());
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn release_stops_loaded_track() {
        let (mut audio, recorder) = loaded(AudioOptions::new("song.mp3"));
        audio.play();
        audio.release();
        assert!(!audio.is_loaded());
        assert!(!audio.status().playing);
        assert_eq!(recorder.count(&Event::Stop), 1);
    }

    #[test]
    fn drop_stops_track() {
        let (audio, recorder) = loaded(AudioOptions::new("song.mp3"));
        drop(audio);
        assert_eq!(recorder.count(&Event::Stop), 1);
    }

    #[test]
    fn reload_swaps_source() {
        let (mut audio, _) = loaded(AudioOptions::new("a.mp3"));
        let request = audio.reload(AudioOptions::new("b.mp3")).unwrap();
        assert_eq!(request.sources, vec![PathBuf::from("b.mp3")]);
        assert!(audio.status().loading);
        assert!(audio.complete_load(request.generation, Ok(vec![9])));
        assert!(audio.is_loaded());
    }

    #[test]
    fn reload_without_preload_defers() {
        let (mut audio, _) = loaded(AudioOptions::new("a.mp3"));
        let lazy = AudioOptions {
            preload: false,
            ..AudioOptions::new("b.mp3")
        };
        assert!(audio.reload(lazy).is_none());
        assert!(audio.needs_load());
    }

    #[test]
    fn volume_is_clamped() {
        let (mut audio, recorder) = loaded(AudioOptions::new("song.mp3"));
        audio.set_volume(1.7);
        assert_eq!(audio.volume(), 1.0);
        audio.set_volume(-0.2);
        assert_eq!(audio.volume(), 0.0);
        assert!(recorder.events().contains(&Event::Volume(1.0)));
    }

    #[test]
    fn refresh_detects_end_of_non_looping_track() {
        let (mut audio, _) = adapter(AudioOptions::new("song.mp3"));
        let finished = Rc::clone(&audio.backend.finished);
        let request = audio.begin_load().unwrap();
        audio.complete_load(request.generation, Ok(vec![1]));
        audio.play();
        assert!(!audio.refresh());
        *finished.borrow_mut() = true;
        assert!(audio.refresh());
        assert!(!audio.status().playing);
    }

    #[test]
    fn request_playback_starts_deferred_load() {
        let (mut audio, recorder) = adapter(AudioOptions {
            preload: false,
            ..AudioOptions::new("song.mp3")
        });
        assert!(audio.request_playback(false).is_none());

        let request = audio.request_playback(true).unwrap();
        assert!(audio.request_playback(true).is_none());
        audio.complete_load(request.generation, Ok(vec![1, 2]));
        assert!(audio.status().playing);
        assert_eq!(recorder.count(&Event::Play), 1);
    }

    #[test]
    fn request_playback_on_loaded_track_plays_in_place() {
        let (mut audio, recorder) = loaded(AudioOptions::new("song.mp3"));
        assert!(audio.request_playback(true).is_none());
        assert!(audio.status().playing);
        assert!(audio.request_playback(false).is_none());
        assert!(!audio.status().playing);
        assert_eq!(recorder.count(&Event::Pause), 1);
    }

    #[test]
    fn replay_after_end_starts_over() {
        let (mut audio, recorder) = loaded(AudioOptions::new("song.mp3"));
        let finished = Rc::clone(&audio.backend.finished);
        audio.play();
        *finished.borrow_mut() = true;
        assert!(audio.refresh());

        audio.play();
        assert!(audio.status().playing);
        assert_eq!(recorder.count(&Event::Stop), 1);
        assert!(!audio.has_ended());
        assert!(!audio.refresh());
        assert!(audio.status().playing);
    }

    #[test]
    fn play_does_not_rewind_unfinished_track() {
        let (mut audio, recorder) = loaded(AudioOptions::new("song.mp3"));
        audio.play();
        audio.pause();
        audio.play();
        assert_eq!(recorder.count(&Event::Stop), 0);
    }

    #[test]
    fn refresh_ignores_looping_track() {
        let (mut audio, _) = adapter(AudioOptions {
            looping: true,
            ..AudioOptions::new("song.mp3")
        });
        let finished = Rc::clone(&audio.backend.finished);
        let request = audio.begin_load().unwrap();
        audio.complete_load(request.generation, Ok(vec![1]));
        audio.play();
        *finished.borrow_mut() = true;
        assert!(!audio.refresh());
        assert!(audio.status().playing);
    }
}
