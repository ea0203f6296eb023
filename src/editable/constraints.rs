//! Input filters for a single-line field.
//!
//! `EditConstraints` is the field's filter list: it is consulted on every
//! user edit, and can be taken out wholesale (see [`EditConstraints::suspend`])
//! while the mask engine splices in literal characters.

/// Filters that limit what user edits are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditConstraints {
    /// Maximum length in characters (None = unlimited)
    pub max_length: Option<usize>,
}

impl EditConstraints {
    /// No filters at all
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Length filter derived from a mask template
    pub fn max_length(max: usize) -> Self {
        Self {
            max_length: Some(max),
        }
    }

    /// How many characters may be inserted into text of `current_len`
    /// characters, capped at `wanted`.
    pub fn room_for(&self, current_len: usize, wanted: usize) -> usize {
        match self.max_length {
            Some(max) => wanted.min(max.saturating_sub(current_len)),
            None => wanted,
        }
    }

    /// Take the filters out, leaving the field unrestricted.
    ///
    /// Pair with [`EditConstraints::restore`]; prefer
    /// `EditableState::suspend_filters`, which does both.
    pub fn suspend(&mut self) -> EditConstraints {
        std::mem::take(self)
    }

    /// Put previously suspended filters back
    pub fn restore(&mut self, saved: EditConstraints) {
        *self = saved;
    }
}
