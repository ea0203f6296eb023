//! Message and notification types for field editing.

/// The single "edit applied" notification.
///
/// Emitted once per user edit after the buffer has changed: `removed`
/// characters starting at `index` were replaced by `added` characters.
/// Cursor movement never produces a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditDelta {
    /// Character offset where the change starts
    pub index: usize,
    /// Number of characters removed at `index`
    pub removed: usize,
    /// Number of characters inserted at `index`
    pub added: usize,
}

impl EditDelta {
    pub const fn new(index: usize, removed: usize, added: usize) -> Self {
        Self {
            index,
            removed,
            added,
        }
    }

    pub const fn insertion(index: usize, added: usize) -> Self {
        Self::new(index, 0, added)
    }

    pub const fn deletion(index: usize, removed: usize) -> Self {
        Self::new(index, removed, 0)
    }

    /// True if at least one character was added
    pub const fn added_text(&self) -> bool {
        self.added != 0
    }

    /// Offset of the last added character, if any were added
    pub const fn last_added_index(&self) -> Option<usize> {
        if self.added == 0 {
            None
        } else {
            Some(self.index + self.added - 1)
        }
    }
}

/// Target for cursor movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Move one character left
    Left,
    /// Move one character right
    Right,
    /// Move to start of field
    Start,
    /// Move to end of field
    End,
    /// Jump to an absolute character offset (clamped)
    Offset(usize),
}

/// Editing message for a single-line field.
#[derive(Debug, Clone, PartialEq)]
pub enum TextEditMsg {
    /// Move cursor without affecting selection
    Move(MoveTarget),
    /// Move cursor and extend selection
    MoveWithSelection(MoveTarget),
    /// Insert a single character
    InsertChar(char),
    /// Insert a string (e.g., from paste)
    InsertText(String),
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character after cursor (Delete)
    DeleteForward,
    /// Select all text
    SelectAll,
    /// Remove all text
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_added_index() {
        assert_eq!(EditDelta::insertion(2, 1).last_added_index(), Some(2));
        assert_eq!(EditDelta::new(0, 3, 4).last_added_index(), Some(3));
        assert_eq!(EditDelta::deletion(4, 1).last_added_index(), None);
    }
}
