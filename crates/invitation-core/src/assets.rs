//! Static asset resolution.
//!
//! Images are handed to the webview as `data:` URIs so the asset directory
//! can live anywhere on disk.

use std::path::{Component, Path, PathBuf};

use base64::Engine;

use crate::error::{InvitationError, InvitationResult};

/// Root directory holding images and music
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `relative` under the root.
    ///
    /// A leading `/` is accepted so web-style paths (`/images/a.jpg`)
    /// resolve the same as `images/a.jpg`. Parent components are dropped.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        let mut path = self.root.clone();
        for component in Path::new(relative.trim_start_matches('/')).components() {
            if let Component::Normal(part) = component {
                path.push(part);
            }
        }
        path
    }

    /// Read an asset and encode it as a `data:` URI
    pub fn data_uri(&self, relative: &str) -> InvitationResult<String> {
        let path = self.resolve(relative);
        let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => InvitationError::AssetNotFound(relative.to_string()),
            _ => InvitationError::Io(e),
        })?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
        Ok(format!("data:{};base64,{}", mime_type(&path), encoded))
    }
}

/// MIME type guessed from the file extension
pub fn mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("mp3") => "audio/mpeg",
        Some("ogg") => "audio/ogg",
        Some("wav") => "audio/wav",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_web_style_paths() {
        let store = AssetStore::new("/srv/assets");
        assert_eq!(store.resolve("/images/floral.jpg"), PathBuf::from("/srv/assets/images/floral.jpg"));
        assert_eq!(store.resolve("images/floral.jpg"), PathBuf::from("/srv/assets/images/floral.jpg"));
    }

    #[test]
    fn drops_parent_components() {
        let store = AssetStore::new("/srv/assets");
        assert_eq!(store.resolve("../../etc/passwd"), PathBuf::from("/srv/assets/etc/passwd"));
    }

    #[test]
    fn guesses_mime_types() {
        assert_eq!(mime_type(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(mime_type(Path::new("a.png")), "image/png");
        assert_eq!(mime_type(Path::new("a")), "application/octet-stream");
    }

    #[test]
    fn encodes_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/dot.png"), b"abc").unwrap();

        let store = AssetStore::new(dir.path());
        assert_eq!(store.data_uri("images/dot.png").unwrap(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn missing_asset_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(dir.path());
        let err = store.data_uri("images/none.jpg").unwrap_err();
        assert!(matches!(err, InvitationError::AssetNotFound(_)));
    }
}
