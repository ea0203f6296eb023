//! The capability surface a host widget exposes to the validator.

/// Read/write access to the host field.
///
/// The validator reads the text and, on failure, writes an error message,
/// makes the field focusable and asks for focus. It never owns any of this.
pub trait FieldAccess {
    /// Current text content
    fn text(&self) -> String;

    /// Current error message, if any
    fn error(&self) -> Option<&str>;

    /// Set or clear the error message
    fn set_error(&mut self, message: Option<String>);

    fn request_focus(&mut self);

    fn set_focusable(&mut self, focusable: bool);
}

/// Error and focus state a host keeps next to its text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldStatus {
    pub error: Option<String>,
    pub focused: bool,
    pub focusable: bool,
    /// Number of focus requests received (hosts may coalesce them)
    pub focus_requests: usize,
}

impl FieldStatus {
    pub fn new() -> Self {
        Self {
            focusable: true,
            ..Self::default()
        }
    }

    pub fn set_error(&mut self, message: Option<String>) {
        self.error = message;
    }

    pub fn request_focus(&mut self) {
        self.focus_requests += 1;
        if self.focusable {
            self.focused = true;
        }
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }
}
