//! Photo gallery lightbox state.

/// Which gallery photo, if any, is shown enlarged
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Lightbox {
    current: Option<usize>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the enlarged photo
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Enlarge photo `index` of a gallery with `len` photos.
    ///
    /// Out-of-range indices leave the lightbox unchanged and return `false`.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            tracing::warn!(index, len, "Ignoring lightbox request for missing photo");
            return false;
        }
        self.current = Some(index);
        true
    }

    /// Return to the thumbnail grid
    pub fn close(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_close() {
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.is_open());
        assert!(lightbox.open(2, 3));
        assert_eq!(lightbox.current(), Some(2));
        lightbox.close();
        assert_eq!(lightbox.current(), None);
    }

    #[test]
    fn rejects_out_of_range() {
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.open(3, 3));
        assert!(!lightbox.is_open());
    }
}
