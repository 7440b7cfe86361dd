//! Cursor state for the image modal.
//!
//! Navigation clamps at both ends instead of wrapping; the browser layer
//! hides the previous/next controls when `at_start`/`at_end` report a
//! boundary.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryCursor {
    index: usize,
    len: usize,
}

impl GalleryCursor {
    /// Cursor over `len` images, opened at `start` (clamped into range).
    /// Returns `None` for an empty image set.
    pub fn new(len: usize, start: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            index: start.min(len - 1),
            len,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.index + 1 == self.len
    }

    /// Step back one image; no-op at the start. Returns whether it moved.
    pub fn prev(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one image; no-op at the end. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.index += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::GalleryCursor;

    #[test]
    fn empty_set_has_no_cursor() {
        assert!(GalleryCursor::new(0, 0).is_none());
    }

    #[test]
    fn open_index_is_clamped() {
        let c = GalleryCursor::new(3, 7).unwrap();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn prev_clamps_at_zero() {
        let mut c = GalleryCursor::new(4, 0).unwrap();
        for _ in 0..4 {
            c.prev();
        }
        assert_eq!(c.index(), 0);
        assert!(c.at_start());
    }

    #[test]
    fn next_clamps_at_last() {
        let mut c = GalleryCursor::new(4, 3).unwrap();
        for _ in 0..4 {
            c.next();
        }
        assert_eq!(c.index(), 3);
        assert!(c.at_end());
    }

    #[test]
    fn walks_the_full_range() {
        let mut c = GalleryCursor::new(3, 0).unwrap();
        assert!(c.next());
        assert!(!c.at_start() && !c.at_end());
        assert!(c.next());
        assert!(!c.next());
        assert!(c.prev());
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn single_image_is_both_boundaries() {
        let mut c = GalleryCursor::new(1, 0).unwrap();
        assert!(c.at_start() && c.at_end());
        assert!(!c.prev());
        assert!(!c.next());
    }
}
