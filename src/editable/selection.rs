//! Selection type for the single-line editing primitive.

use std::ops::Range;

/// A text selection with anchor (start point) and head (caret position),
/// both character offsets.
/// The anchor stays fixed while the head moves during selection extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the caret is (moving point)
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (caret with no selection)
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    /// Check if selection is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Get the start offset (minimum of anchor and head)
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Get the end offset (maximum of anchor and head)
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Selected character range
    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Extend selection to new head offset
    pub fn extend_to(&mut self, offset: usize) {
        self.head = offset;
    }

    /// Collapse selection to head
    pub fn collapse(&mut self) {
        self.anchor = self.head;
    }

    /// Clamp both ends to a buffer of `len` characters
    pub fn clamp(&mut self, len: usize) {
        self.anchor = self.anchor.min(len);
        self.head = self.head.min(len);
    }
}
