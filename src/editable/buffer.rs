//! Text buffer traits and the single-line `StringBuffer` backend.
//!
//! All offsets are character offsets, never byte offsets. Callers work in
//! the same units the mask template uses, so a `#` slot at template index 3
//! lines up with the 4th typed character regardless of its UTF-8 width.

use std::borrow::Cow;
use std::ops::Range;

/// Read-only view into a field buffer.
pub trait TextBuffer {
    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Check if buffer is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Borrow or build the full content
    fn content(&self) -> Cow<'_, str>;
}

/// Mutable buffer operations. Extends TextBuffer.
pub trait TextBufferMut: TextBuffer {
    /// Insert text at character offset
    fn insert(&mut self, offset: usize, text: &str);

    /// Remove text in character range
    fn remove(&mut self, range: Range<usize>);

    /// Replace text in range with new text
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

    /// Convert char offset to byte offset (past-the-end offsets clamp to len)
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

    fn content(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }
}

impl TextBufferMut for StringBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert_str(byte_offset, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start_byte = self.char_to_byte(range.start);
        let end_byte = self.char_to_byte(range.end).max(start_byte);
        self.text.replace_range(start_byte..end_byte, "");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_remove_use_char_offsets() {
        let mut buf = StringBuffer::from_text("né-1");
        buf.insert(2, "x");
        assert_eq!(buf.content(), "néx-1");
        buf.remove(1..3);
        assert_eq!(buf.content(), "n-1");
    }

    #[test]
    fn test_remove_clamps_out_of_range() {
        let mut buf = StringBuffer::from_text("hello");
        buf.remove(3..10);
        assert_eq!(buf.content(), "hel");
        buf.remove(8..10);
        assert_eq!(buf.content(), "hel");
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut buf = StringBuffer::from_text("12");
        buf.insert(99, "-");
        assert_eq!(buf.content(), "12-");
    }

    #[test]
    fn test_set_content() {
        let mut buf = StringBuffer::from_text("old");
        buf.set_content("new text");
        assert_eq!(buf.content(), "new text");
        assert_eq!(buf.len_chars(), 8);
    }
}
