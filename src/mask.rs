//! Input masking: auto-insert literal template characters while typing.
//!
//! A mask template mixes placeholder slots with fixed literals:
//!
//! | char | slot                 |
//! |------|----------------------|
//! | `#`  | digit                |
//! | `A`  | letter               |
//! | `*`  | any character        |
//! | else | literal, inserted automatically |
//!
//! With the template `###-###`, typing the third digit makes the field read
//! `123-`. Only additions trigger insertion; deleting back over the `-`
//! leaves it deleted.

use crate::editable::{
    EditConstraints, EditDelta, EditableState, TextBuffer, TextBufferMut,
};

/// Placeholder for a digit
pub const DIGIT_SLOT: char = '#';
/// Placeholder for a letter
pub const LETTER_SLOT: char = 'A';
/// Placeholder for any character
pub const ANY_SLOT: char = '*';

/// One position of a mask template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskSlot {
    Digit,
    Letter,
    Any,
    Literal(char),
}

impl MaskSlot {
    pub fn from_char(ch: char) -> Self {
        match ch {
            DIGIT_SLOT => MaskSlot::Digit,
            LETTER_SLOT => MaskSlot::Letter,
            ANY_SLOT => MaskSlot::Any,
            other => MaskSlot::Literal(other),
        }
    }

    /// The literal character, or None for a fillable slot
    pub fn literal(self) -> Option<char> {
        match self {
            MaskSlot::Literal(ch) => Some(ch),
            _ => None,
        }
    }
}

/// Compute the literal run to splice in right after `index`.
///
/// `text` is the field content immediately after a character was typed at
/// `index`. Scans the template from `index + 1` while the template holds a
/// literal and the text has no character there yet, stopping at the first
/// placeholder or the end of the template.
///
/// ```
/// use maskfield::mask::compute_insertion;
///
/// assert_eq!(compute_insertion("###-###", "123", 2), "-");
/// assert_eq!(compute_insertion("(##) ##", "(12", 2), ") ");
/// assert_eq!(compute_insertion("###-###", "12", 1), "");
/// ```
pub fn compute_insertion(template: &str, text: &str, index: usize) -> String {
    let slots: Vec<MaskSlot> = template.chars().map(MaskSlot::from_char).collect();
    literal_run(&slots, text.chars().count(), index)
}

fn literal_run(slots: &[MaskSlot], text_len: usize, index: usize) -> String {
    if index >= text_len {
        return String::new();
    }
    slots
        .iter()
        .enumerate()
        .skip(index + 1)
        .take_while(|(pos, _)| *pos >= text_len)
        .map_while(|(_, slot)| slot.literal())
        .collect()
}

/// A parsed, immutable mask template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTemplate {
    source: String,
    slots: Vec<MaskSlot>,
}

impl MaskTemplate {
    /// Parse a template. Blank templates mean "no mask" and yield None.
    pub fn parse(template: &str) -> Option<Self> {
        if template.trim().is_empty() {
            return None;
        }
        Some(Self {
            source: template.to_string(),
            slots: template.chars().map(MaskSlot::from_char).collect(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Template length in characters
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// See [`compute_insertion`].
    pub fn insertion_after(&self, text_len: usize, index: usize) -> String {
        literal_run(&self.slots, text_len, index)
    }

    /// Length filter matching the template: a masked field never holds
    /// more characters than its template has positions.
    pub fn length_filter(&self) -> EditConstraints {
        EditConstraints::max_length(self.len())
    }
}

/// Drives mask insertion from edit notifications.
///
/// Holds the template and the one-bit "last change added text" flag; the
/// text itself lives in the field.
#[derive(Debug, Clone)]
pub struct MaskEngine {
    template: MaskTemplate,
    last_change_added: bool,
}

impl MaskEngine {
    pub fn new(template: MaskTemplate) -> Self {
        Self {
            template,
            last_change_added: false,
        }
    }

    pub fn template(&self) -> &MaskTemplate {
        &self.template
    }

    pub fn last_change_added(&self) -> bool {
        self.last_change_added
    }

    /// Observe an applied edit and splice in any literals it calls for.
    ///
    /// Returns the inserted literal run, or None if nothing was inserted.
    pub fn on_edit_applied<B>(
        &mut self,
        state: &mut EditableState<B>,
        delta: EditDelta,
    ) -> Option<String>
    where
        B: TextBuffer + TextBufferMut,
    {
        self.last_change_added = delta.added_text();
        if !self.last_change_added {
            return None;
        }

        let index = delta.last_added_index()?;
        let insertion = self
            .template
            .insertion_after(state.buffer.len_chars(), index);
        if insertion.is_empty() {
            return None;
        }

        tracing::debug!(
            mask = self.template.as_str(),
            index,
            literal = %insertion,
            "inserting mask literals"
        );
        state.suspend_filters().splice(index + 1, &insertion);
        Some(insertion)
    }
}
