//! Background audio hook.
//!
//! Owns an [`AudioAdapter`] for the lifetime of the calling component.
//! Source bytes are read on tokio's blocking pool; the decoder and output
//! sink are created back on the UI thread when the load completes.

use std::time::Duration;

use dioxus::prelude::*;
use invitation_core::audio::{fetch_source, RodioBackend};
use invitation_core::{AudioAdapter, AudioError, AudioOptions, AudioStatus, LoadRequest};

/// How often to check whether a non-looping track has ended
const END_POLL_INTERVAL: Duration = Duration::from_millis(500);

type Adapter = AudioAdapter<RodioBackend>;

/// Handle returned by [`use_audio`]
#[derive(Clone, Copy)]
pub struct UseAudio {
    adapter: Signal<Adapter>,
}

impl UseAudio {
    /// Current status. Reading subscribes the caller to changes.
    pub fn status(&self) -> AudioStatus {
        self.adapter.read().status()
    }

    /// Start playback, loading first if the track was not preloaded.
    ///
    /// A request made while loading is honoured once the load completes.
    pub fn play(&mut self) {
        self.request(true);
    }

    /// Pause playback and withdraw any pending request to play.
    pub fn pause(&mut self) {
        self.request(false);
    }

    /// Halt and rewind to the start.
    #[allow(dead_code)]
    pub fn stop(&mut self) {
        self.adapter.write().stop();
    }

    #[allow(dead_code)]
    pub fn mute(&mut self, muted: bool) {
        self.adapter.write().mute(muted);
    }

    /// Set the volume, clamped to 0.0 - 1.0.
    #[allow(dead_code)]
    pub fn set_volume(&mut self, volume: f32) {
        self.adapter.write().set_volume(volume);
    }

    /// Play or pause to match `playing`.
    pub fn set_playback_intent(&mut self, playing: bool) {
        if playing {
            self.play();
        } else {
            self.pause();
        }
    }

    fn request(&mut self, playing: bool) {
        let request = self.adapter.write().request_playback(playing);
        if let Some(request) = request {
            spawn_load(self.adapter, request);
        }
    }
}

/// Read the source off the UI thread, then hand the bytes to the adapter
fn spawn_load(mut adapter: Signal<Adapter>, request: LoadRequest) {
    spawn(async move {
        let LoadRequest { generation, sources } = request;
        let result = match tokio::task::spawn_blocking(move || fetch_source(&sources)).await {
            Ok(result) => result,
            Err(e) => Err(AudioError::Task(e.to_string())),
        };
        if let Ok(mut adapter) = adapter.try_write() {
            adapter.complete_load(generation, result);
        }
    });
}

/// Load and control one audio resource.
///
/// The resource is released when the component unmounts and whenever
/// `options` changes; a load still in flight at that point is discarded.
pub fn use_audio(options: AudioOptions) -> UseAudio {
    let initial = options.clone();
    let mut adapter = use_signal(move || AudioAdapter::new(RodioBackend, initial));

    // Load on mount, reload when the source configuration changes
    use_effect(use_reactive((&options,), move |(options,)| {
        let request = {
            let mut current = adapter.write();
            if *current.options() != options {
                tracing::info!("Audio source changed, reloading");
                current.reload(options)
            } else if current.options().preload {
                current.begin_load()
            } else {
                None
            }
        };
        if let Some(request) = request {
            spawn_load(adapter, request);
        }
    }));

    // Notice the end of non-looping tracks
    use_future(move || async move {
        loop {
            tokio::time::sleep(END_POLL_INTERVAL).await;
            if adapter.peek().has_ended() {
                adapter.write().refresh();
            }
        }
    });

    use_drop(move || {
        if let Ok(mut current) = adapter.try_write() {
            current.release();
        }
    });

    UseAudio { adapter }
}
