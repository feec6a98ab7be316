//! Native playback through rodio.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use super::{AudioBackend, AudioError, AudioOptions, AudioTrack};

/// Opens tracks on the default output device
#[derive(Debug, Default, Clone, Copy)]
pub struct RodioBackend;

impl AudioBackend for RodioBackend {
    type Track = RodioTrack;

    fn open(&mut self, data: Vec<u8>, options: &AudioOptions) -> Result<RodioTrack, AudioError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::Device(e.to_string()))?;

        let mut track = RodioTrack {
            sink: None,
            handle,
            _stream: stream,
            data: Arc::from(data),
            stream: options.stream,
            looping: options.looping,
            volume: options.volume.clamp(0.0, 1.0),
            muted: false,
        };
        track.sink = Some(track.build_sink()?);
        Ok(track)
    }
}

/// A decoded track bound to an output stream.
///
/// Holds the encoded bytes so a drained or unseekable sink can be rebuilt.
pub struct RodioTrack {
    sink: Option<Sink>,
    handle: OutputStreamHandle,
    _stream: OutputStream,
    data: Arc<[u8]>,
    stream: bool,
    looping: bool,
    volume: f32,
    muted: bool,
}

fn decode_error(e: rodio::decoder::DecoderError) -> AudioError {
    AudioError::Decode(e.to_string())
}

impl RodioTrack {
    /// New paused sink positioned at the start of the track
    fn build_sink(&self) -> Result<Sink, AudioError> {
        let sink = Sink::try_new(&self.handle).map_err(|e| AudioError::Device(e.to_string()))?;
        sink.pause();

        let cursor = Cursor::new(Arc::clone(&self.data));
        match (self.stream, self.looping) {
            (true, true) => sink.append(Decoder::new_looped(cursor).map_err(decode_error)?),
            (true, false) => sink.append(Decoder::new(cursor).map_err(decode_error)?),
            (false, true) => {
                sink.append(Decoder::new(cursor).map_err(decode_error)?.buffered().repeat_infinite())
            }
            (false, false) => sink.append(Decoder::new(cursor).map_err(decode_error)?.buffered()),
        }

        sink.set_volume(self.effective_volume());
        Ok(sink)
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }
}

impl AudioTrack for RodioTrack {
    fn play(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
            if !sink.empty() {
                match sink.try_seek(Duration::ZERO) {
                    Ok(()) => return,
                    Err(e) => tracing::debug!("Seek failed, rebuilding sink: {:?}", e),
                }
            }
        }
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        match self.build_sink() {
            Ok(sink) => self.sink = Some(sink),
            Err(e) => tracing::warn!("Failed to rewind audio track: {}", e),
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(sink) = &self.sink {
            sink.set_volume(self.effective_volume());
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = &self.sink {
            sink.set_volume(self.effective_volume());
        }
    }

    fn is_finished(&self) -> bool {
        self.sink.as_ref().map_or(true, |sink| sink.empty())
    }
}
