//! Field validation: required, numeric range, and equals-or-pattern.
//!
//! The validator never owns field state. It works through the
//! [`FieldAccess`] trait, so any host widget can be validated.
//!
//! # Example
//!
//! ```
//! use maskfield::validation::{FieldAccess, FieldStatus, ValidationConfig, ValidationKind, Validator};
//!
//! struct Input {
//!     text: String,
//!     status: FieldStatus,
//! }
//!
//! impl FieldAccess for Input {
//!     fn text(&self) -> String { self.text.clone() }
//!     fn error(&self) -> Option<&str> { self.status.error.as_deref() }
//!     fn set_error(&mut self, message: Option<String>) { self.status.set_error(message) }
//!     fn request_focus(&mut self) { self.status.request_focus() }
//!     fn set_focusable(&mut self, focusable: bool) { self.status.focusable = focusable }
//! }
//!
//! let validator = Validator::new("age", ValidationConfig::new(ValidationKind::range(0.0, 10.0)));
//! let mut input = Input { text: "15".into(), status: FieldStatus::new() };
//!
//! assert!(!validator.is_in_range(&mut input));
//! assert_eq!(input.error(), Some("Range is 0 to 10 !!"));
//! ```

mod config;
mod host;
mod validator;

pub use config::{ConfigError, ConfigResult, Pattern, ValidationConfig, ValidationKind};
pub use host::{FieldAccess, FieldStatus};
pub use validator::{
    format_bound, range_message, Validator, PATTERN_MESSAGE, REQUIRED_MESSAGE,
};
