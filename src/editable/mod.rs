//! Single-line editable text for input fields.
//!
//! # Architecture
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: Traits abstracting over buffer implementations
//! - [`StringBuffer`]: `String`-backed buffer for single-line inputs
//! - [`EditableState`]: Buffer plus cursor, selection and input filters
//! - [`EditConstraints`]: The field's filter list (a max length)
//! - [`FilterSuspension`]: Scoped guard that lifts the filters for a programmatic splice
//! - [`EditDelta`]: The "edit applied" notification every user edit produces
//! - [`TextEditMsg`]: Editing message type
//!
//! # Example
//!
//! ```
//! use maskfield::editable::{EditConstraints, EditDelta, EditableState, StringBuffer};
//!
//! let mut state = EditableState::new(StringBuffer::new(), EditConstraints::max_length(3));
//! assert_eq!(state.insert_text("12"), Some(EditDelta::insertion(0, 2)));
//!
//! state.suspend_filters().splice(2, "--");
//! assert_eq!(state.text(), "12--");
//! assert_eq!(state.constraints.max_length, Some(3));
//! ```

mod buffer;
mod constraints;
mod messages;
mod selection;
mod state;

pub use buffer::{StringBuffer, TextBuffer, TextBufferMut};
pub use constraints::EditConstraints;
pub use messages::{EditDelta, MoveTarget, TextEditMsg};
pub use selection::Selection;
pub use state::{EditableState, FilterSuspension};
