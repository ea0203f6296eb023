//! EditableState - single-line editable text with cursor, selection and filters.

use std::ops::{Deref, DerefMut};

use super::buffer::{TextBuffer, TextBufferMut};
use super::constraints::EditConstraints;
use super::messages::{EditDelta, MoveTarget, TextEditMsg};
use super::selection::Selection;

/// Editable text for one input field.
///
/// Every user edit goes through the constraints and reports an [`EditDelta`].
/// Programmatic splices go through [`FilterSuspension::splice`] and report
/// nothing, so observers of deltas never see their own edits.
#[derive(Debug, Clone)]
pub struct EditableState<B: TextBuffer> {
    /// The text buffer
    pub buffer: B,
    /// Cursor offset in characters
    pub cursor: usize,
    /// Selection (collapsed at the cursor when nothing is selected)
    pub selection: Selection,
    /// Active input filters
    pub constraints: EditConstraints,
}

impl<B: TextBuffer> EditableState<B> {
    /// Create a new EditableState with the cursor at the end of the buffer
    pub fn new(buffer: B, constraints: EditConstraints) -> Self {
        let end = buffer.len_chars();
        Self {
            buffer,
            cursor: end,
            selection: Selection::collapsed(end),
            constraints,
        }
    }

    /// Get the text content as a String
    pub fn text(&self) -> String {
        self.buffer.content().into_owned()
    }

    /// Check if there is a non-empty selection
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Collapse selection to cursor position
    pub fn collapse_selection(&mut self) {
        self.selection = Selection::collapsed(self.cursor);
    }

    fn place_cursor(&mut self, offset: usize, extend_selection: bool) {
        self.cursor = offset.min(self.buffer.len_chars());
        if extend_selection {
            self.selection.extend_to(self.cursor);
        } else {
            self.collapse_selection();
        }
    }

    /// Move the cursor. Never changes the text.
    pub fn move_cursor(&mut self, target: MoveTarget, extend_selection: bool) {
        // A collapsing left/right jumps to the selection edge
        if !extend_selection && self.has_selection() {
            match target {
                MoveTarget::Left => return self.place_cursor(self.selection.start(), false),
                MoveTarget::Right => return self.place_cursor(self.selection.end(), false),
                _ => {}
            }
        }

        let offset = match target {
            MoveTarget::Left => self.cursor.saturating_sub(1),
            MoveTarget::Right => self.cursor + 1,
            MoveTarget::Start => 0,
            MoveTarget::End => self.buffer.len_chars(),
            MoveTarget::Offset(offset) => offset,
        };
        self.place_cursor(offset, extend_selection);
    }

    /// Select all text
    pub fn select_all(&mut self) {
        let len = self.buffer.len_chars();
        self.selection = Selection::new(0, len);
        self.cursor = len;
    }
}

// =============================================================================
// Editing Operations (require TextBufferMut)
// =============================================================================

impl<B: TextBuffer + TextBufferMut> EditableState<B> {
    /// Apply an editing message. Returns the delta if the buffer changed.
    pub fn apply(&mut self, msg: &TextEditMsg) -> Option<EditDelta> {
        match msg {
            TextEditMsg::Move(target) => {
                self.move_cursor(*target, false);
                None
            }
            TextEditMsg::MoveWithSelection(target) => {
                self.move_cursor(*target, true);
                None
            }
            TextEditMsg::InsertChar(ch) => self.insert_char(*ch),
            TextEditMsg::InsertText(text) => self.insert_text(text),
            TextEditMsg::DeleteBackward => self.delete_backward(),
            TextEditMsg::DeleteForward => self.delete_forward(),
            TextEditMsg::SelectAll => {
                self.select_all();
                None
            }
            TextEditMsg::Clear => self.clear(),
        }
    }

    /// Insert a character at the cursor position, replacing any selection.
    /// Returns None if the character was rejected by the filters.
    pub fn insert_char(&mut self, ch: char) -> Option<EditDelta> {
        let mut buf = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut buf))
    }

    /// Insert text at the cursor position, replacing any selection.
    ///
    /// Text that would overflow the length filter is truncated to fit.
    pub fn insert_text(&mut self, text: &str) -> Option<EditDelta> {
        if text.is_empty() || text.contains('\n') {
            return None;
        }

        let removed = self.selection.len();
        let remaining = self.buffer.len_chars().saturating_sub(removed);
        let insert_len = self
            .constraints
            .room_for(remaining, text.chars().count());
        if insert_len == 0 {
            return None;
        }

        let index = if removed > 0 {
            self.selection.start()
        } else {
            self.cursor
        };
        let inserted: String = text.chars().take(insert_len).collect();
        self.buffer.replace(index..index + removed, &inserted);

        self.cursor = index + insert_len;
        self.collapse_selection();

        Some(EditDelta::new(index, removed, insert_len))
    }

    /// Delete character before cursor (Backspace)
    pub fn delete_backward(&mut self) -> Option<EditDelta> {
        if self.has_selection() {
            return self.delete_selection();
        }
        if self.cursor == 0 {
            return None;
        }

        let index = self.cursor - 1;
        self.buffer.remove(index..self.cursor);
        self.cursor = index;
        self.collapse_selection();
        Some(EditDelta::deletion(index, 1))
    }

    /// Delete character after cursor (Delete key)
    pub fn delete_forward(&mut self) -> Option<EditDelta> {
        if self.has_selection() {
            return self.delete_selection();
        }
        if self.cursor >= self.buffer.len_chars() {
            return None;
        }

        self.buffer.remove(self.cursor..self.cursor + 1);
        Some(EditDelta::deletion(self.cursor, 1))
    }

    fn delete_selection(&mut self) -> Option<EditDelta> {
        let start = self.selection.start();
        let removed = self.selection.len();
        self.buffer.remove(start..start + removed);
        self.cursor = start;
        self.collapse_selection();
        Some(EditDelta::deletion(start, removed))
    }

    /// Remove all text
    pub fn clear(&mut self) -> Option<EditDelta> {
        let len = self.buffer.len_chars();
        if len == 0 {
            return None;
        }
        self.buffer.clear();
        self.cursor = 0;
        self.collapse_selection();
        Some(EditDelta::deletion(0, len))
    }

    /// Replace the content without going through filters or notifications
    pub fn set_content(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.cursor = self.buffer.len_chars();
        self.collapse_selection();
    }

    /// Take the filters out until the returned guard is dropped.
    pub fn suspend_filters(&mut self) -> FilterSuspension<'_, B> {
        let saved = self.constraints.suspend();
        tracing::trace!(?saved, "input filters suspended");
        FilterSuspension {
            state: self,
            saved: Some(saved),
        }
    }
}

/// Scoped filter suspension.
///
/// While alive, the field has no input filters. Dropping the guard puts the
/// saved filters back, on every exit path.
pub struct FilterSuspension<'a, B: TextBuffer + TextBufferMut> {
    state: &'a mut EditableState<B>,
    saved: Option<EditConstraints>,
}

impl<B: TextBuffer + TextBufferMut> FilterSuspension<'_, B> {
    /// Insert `text` at `offset` without filters and without a delta.
    ///
    /// A cursor at or after `offset` is shifted past the inserted text.
    pub fn splice(&mut self, offset: usize, text: &str) {
        let state = &mut *self.state;
        let offset = offset.min(state.buffer.len_chars());
        let len = text.chars().count();
        state.buffer.insert(offset, text);
        if state.cursor >= offset {
            state.cursor += len;
        }
        state.collapse_selection();
    }
}

impl<B: TextBuffer + TextBufferMut> Deref for FilterSuspension<'_, B> {
    type Target = EditableState<B>;

    fn deref(&self) -> &Self::Target {
        self.state
    }
}

impl<B: TextBuffer + TextBufferMut> DerefMut for FilterSuspension<'_, B> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.state
    }
}

impl<B: TextBuffer + TextBufferMut> Drop for FilterSuspension<'_, B> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.state.constraints.restore(saved);
            tracing::trace!("input filters restored");
        }
    }
}
