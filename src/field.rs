//! A masked, validated input field.
//!
//! `MaskedField` is the reference host: it owns the text, cursor and
//! error/focus state, feeds every applied edit to the mask engine, and lets
//! the validator read and annotate it through [`FieldAccess`].
//!
//! Driven Elm-style: build a [`FieldMsg`], pass it to [`update`], get back
//! an optional [`FieldEvent`] describing what happened.

use serde::Serialize;

use crate::config::{FieldAttributes, FieldConfig};
use crate::editable::{EditConstraints, EditDelta, EditableState, StringBuffer, TextEditMsg};
use crate::mask::MaskEngine;
use crate::validation::{ConfigResult, FieldAccess, FieldStatus, Validator};

/// Which validation entry point to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Check {
    NonEmpty,
    Range,
    EqualsOrPattern,
    /// The entry point that fits the field's type
    All,
}

/// Messages a host sends to a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldMsg {
    Edit(TextEditMsg),
    Validate(Check),
    Focus,
    Blur,
}

/// What a message did.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// The text changed; `inserted` holds mask literals added after it
    Edited {
        delta: EditDelta,
        inserted: Option<String>,
    },
    Validated {
        check: Check,
        passed: bool,
        error: Option<String>,
    },
}

/// Text plus error/focus state; the part the validator sees.
#[derive(Debug, Clone)]
pub struct HostField {
    pub editor: EditableState<StringBuffer>,
    pub status: FieldStatus,
}

impl FieldAccess for HostField {
    fn text(&self) -> String {
        self.editor.text()
    }

    fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }

    fn set_error(&mut self, message: Option<String>) {
        self.status.set_error(message);
    }

    fn request_focus(&mut self) {
        self.status.request_focus();
    }

    fn set_focusable(&mut self, focusable: bool) {
        self.status.focusable = focusable;
    }
}

/// An input field with optional mask and a validator.
#[derive(Debug, Clone)]
pub struct MaskedField {
    host: HostField,
    mask: Option<MaskEngine>,
    validator: Validator,
}

impl MaskedField {
    pub fn new(config: FieldConfig) -> Self {
        let mask = config.mask.map(MaskEngine::new);
        let constraints = mask
            .as_ref()
            .map(|engine| engine.template().length_filter())
            .unwrap_or_else(EditConstraints::unrestricted);
        Self {
            host: HostField {
                editor: EditableState::new(StringBuffer::new(), constraints),
                status: FieldStatus::new(),
            },
            mask,
            validator: Validator::new(config.id, config.validation),
        }
    }

    pub fn from_attributes(id: impl Into<String>, attrs: &FieldAttributes) -> ConfigResult<Self> {
        FieldConfig::from_attributes(id, attrs).map(Self::new)
    }

    pub fn id(&self) -> &str {
        self.validator.id()
    }

    pub fn text(&self) -> String {
        self.host.text()
    }

    pub fn error(&self) -> Option<&str> {
        self.host.error()
    }

    pub fn host(&self) -> &HostField {
        &self.host
    }

    pub fn editor(&self) -> &EditableState<StringBuffer> {
        &self.host.editor
    }

    pub fn status(&self) -> &FieldStatus {
        &self.host.status
    }

    pub fn mask(&self) -> Option<&MaskEngine> {
        self.mask.as_ref()
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// For reconfiguration between validation cycles
    pub fn validator_mut(&mut self) -> &mut Validator {
        &mut self.validator
    }

    /// Apply a user edit and let the mask react to it.
    pub fn edit(&mut self, msg: &TextEditMsg) -> Option<FieldEvent> {
        let delta = self.host.editor.apply(msg)?;
        let inserted = self
            .mask
            .as_mut()
            .and_then(|engine| engine.on_edit_applied(&mut self.host.editor, delta));
        Some(FieldEvent::Edited { delta, inserted })
    }

    /// Type `text` one character at a time, as a user would.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.edit(&TextEditMsg::InsertChar(ch));
        }
    }

    /// Replace the content programmatically (no filters, no masking)
    pub fn set_text(&mut self, text: &str) {
        self.host.editor.set_content(text);
    }

    pub fn is_non_empty(&mut self) -> bool {
        self.validator.is_non_empty(&mut self.host)
    }

    pub fn is_in_range(&mut self) -> bool {
        self.validator.is_in_range(&mut self.host)
    }

    pub fn is_equal_to_pattern_or_default(&mut self) -> bool {
        self.validator.is_equal_to_pattern_or_default(&mut self.host)
    }

    pub fn validate(&mut self, check: Check) -> bool {
        match check {
            Check::NonEmpty => self.is_non_empty(),
            Check::Range => self.is_in_range(),
            Check::EqualsOrPattern => self.is_equal_to_pattern_or_default(),
            Check::All => self.validator.validate_all(&mut self.host),
        }
    }
}

/// Route a message to the field.
pub fn update(field: &mut MaskedField, msg: FieldMsg) -> Option<FieldEvent> {
    match msg {
        FieldMsg::Edit(edit) => field.edit(&edit),
        FieldMsg::Validate(check) => {
            let passed = field.validate(check);
            Some(FieldEvent::Validated {
                check,
                passed,
                error: field.error().map(str::to_string),
            })
        }
        FieldMsg::Focus => {
            field.host.status.request_focus();
            None
        }
        FieldMsg::Blur => {
            field.host.status.blur();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::MoveTarget;

    fn phone_field() -> MaskedField {
        let attrs = FieldAttributes {
            mask: Some("###-###".to_string()),
            ..FieldAttributes::default()
        };
        MaskedField::from_attributes("phone", &attrs).unwrap()
    }

    #[test]
    fn test_unmasked_field_has_no_engine_or_filter() {
        let field = MaskedField::from_attributes("plain", &FieldAttributes::default()).unwrap();
        assert!(field.mask().is_none());
        assert_eq!(field.editor().constraints, EditConstraints::unrestricted());
    }

    #[test]
    fn test_masked_field_installs_length_filter() {
        let field = phone_field();
        assert_eq!(field.editor().constraints.max_length, Some(7));
    }

    #[test]
    fn test_update_edit_reports_inserted_literal() {
        let mut field = phone_field();
        field.type_text("12");
        let event = update(&mut field, FieldMsg::Edit(TextEditMsg::InsertChar('3')));
        assert_eq!(
            event,
            Some(FieldEvent::Edited {
                delta: EditDelta::insertion(2, 1),
                inserted: Some("-".to_string()),
            })
        );
        assert_eq!(field.text(), "123-");
    }

    #[test]
    fn test_typing_past_template_is_filtered() {
        let mut field = phone_field();
        field.type_text("12345678");
        assert_eq!(field.text(), "123-456");
    }

    #[test]
    fn test_move_produces_no_event() {
        let mut field = phone_field();
        field.type_text("1");
        assert_eq!(
            update(&mut field, FieldMsg::Edit(TextEditMsg::Move(MoveTarget::Start))),
            None
        );
    }

    #[test]
    fn test_update_validate_reports_error() {
        let mut field = phone_field();
        let event = update(&mut field, FieldMsg::Validate(Check::NonEmpty));
        assert_eq!(
            event,
            Some(FieldEvent::Validated {
                check: Check::NonEmpty,
                passed: false,
                error: Some("Required! ".to_string()),
            })
        );
        assert!(field.status().focused);
    }

    #[test]
    fn test_focus_and_blur() {
        let mut field = phone_field();
        update(&mut field, FieldMsg::Focus);
        assert!(field.status().focused);
        update(&mut field, FieldMsg::Blur);
        assert!(!field.status().focused);
    }
}
