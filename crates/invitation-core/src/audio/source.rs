//! Blocking source fetch, run off the UI thread.

use std::path::Path;

use super::AudioError;

/// File extensions the playback backend can decode
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "ogg", "wav", "flac", "m4a", "aac"];

/// Whether `path` has a decodable extension
pub fn is_supported_format(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Read the first supported, readable source.
///
/// Sources are tried in order; unsupported extensions are skipped and read
/// failures fall through to the next candidate.
pub fn fetch_source<P: AsRef<Path>>(sources: &[P]) -> Result<Vec<u8>, AudioError> {
    let mut last_error = None;

    for source in sources {
        let path = source.as_ref();
        if !is_supported_format(path) {
            tracing::debug!("Skipping unsupported audio source {:?}", path);
            continue;
        }
        match std::fs::read(path) {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {:?}", data.len(), path);
                return Ok(data);
            }
            Err(e) => {
                tracing::debug!("Audio source {:?} unreadable: {}", path, e);
                last_error = Some(AudioError::Source(format!("{}: {}", path.display(), e)));
            }
        }
    }

    Err(last_error.unwrap_or(AudioError::NoPlayableSource))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn recognises_extensions() {
        assert!(is_supported_format(Path::new("music/song.mp3")));
        assert!(is_supported_format(Path::new("SONG.OGG")));
        assert!(!is_supported_format(Path::new("cover.jpg")));
        assert!(!is_supported_format(Path::new("noext")));
    }

    #[test]
    fn empty_list_has_no_source() {
        let sources: Vec<PathBuf> = Vec::new();
        assert_eq!(fetch_source(&sources), Err(AudioError::NoPlayableSource));
    }

    #[test]
    fn falls_through_to_readable_source() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("song.ogg");
        std::fs::write(&good, b"OggS").unwrap();

        let sources = vec![dir.path().join("missing.mp3"), dir.path().join("notes.txt"), good];
        assert_eq!(fetch_source(&sources).unwrap(), b"OggS".to_vec());
    }

    #[test]
    fn reports_last_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let sources = vec![dir.path().join("missing.mp3")];
        assert!(matches!(fetch_source(&sources), Err(AudioError::Source(_))));
    }
}
