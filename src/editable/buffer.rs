//! Text buffer traits and the single-line implementation backing the field.
//!
//! Provides `TextBuffer` (read-only) and `TextBufferMut` (read-write) traits.
//! All offsets are character offsets, never byte offsets.

use std::ops::Range;

/// Read-only view into a single-line text buffer.
pub trait TextBuffer {
    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Check if buffer is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Get slice of text as String (by character indices)
    fn slice(&self, range: Range<usize>) -> String;

    /// Get full content as String
    fn content(&self) -> String;
}

/// Mutable buffer operations. Extends TextBuffer.
pub trait TextBufferMut: TextBuffer {
    /// Insert text at character offset
    fn insert(&mut self, offset: usize, text: &str);

    /// Insert single character at character offset
    fn insert_char(&mut self, offset: usize, ch: char);

    /// Remove text in character range
    fn remove(&mut self, range: Range<usize>);

    /// Replace text in range with new text (atomic operation)
    fn replace(&mut self, range: Range<usize>, text: &str) {
        self.remove(range.clone());
        self.insert(range.start, text);
    }

    /// Clear all content
    fn clear(&mut self) {
        let len = self.len_chars();
        if len > 0 {
            self.remove(0..len);
        }
    }

    /// Set content, replacing everything
    fn set_content(&mut self, text: &str) {
        self.clear();
        self.insert(0, text);
    }
}

/// TextBuffer implementation wrapping String.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a StringBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Convert char offset to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl TextBuffer for StringBuffer {
    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.text.chars().skip(start).take(end - start).collect()
    }

    fn content(&self) -> String {
        self.text.clone()
    }
}

impl TextBufferMut for StringBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert_str(byte_offset, text);
    }

    fn insert_char(&mut self, offset: usize, ch: char) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert(byte_offset, ch);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start_byte = self.char_to_byte(range.start);
        let end_byte = self.char_to_byte(range.end);
        self.text.replace_range(start_byte..end_byte, "");
    }

    fn set_content(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_remove_by_char_offset() {
        let mut buf = StringBuffer::from_text("12-05");
        buf.insert(5, "-2021");
        assert_eq!(buf.as_str(), "12-05-2021");

        buf.remove(2..3);
        assert_eq!(buf.as_str(), "1205-2021");
    }

    #[test]
    fn test_multibyte_offsets() {
        let mut buf = StringBuffer::from_text("é1");
        buf.insert_char(1, '·');
        assert_eq!(buf.as_str(), "é·1");
        assert_eq!(buf.len_chars(), 3);
        assert_eq!(buf.slice(1..3), "·1");
    }

    #[test]
    fn test_replace_and_clear() {
        let mut buf = StringBuffer::from_text("03-05-2021");
        buf.replace(0..2, "12");
        assert_eq!(buf.as_str(), "12-05-2021");

        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_slice_out_of_bounds() {
        let buf = StringBuffer::from_text("12");
        assert_eq!(buf.slice(1..10), "2");
        assert_eq!(buf.slice(5..10), "");
    }
}
