//! The three validation entry points and the shared pattern check.
//!
//! Each entry point is a short-circuit chain:
//! required gate → non-empty → pattern → type-specific check.
//! The first failing step sets the field's error and ends the call; the
//! message it left is the one the caller sees.

use super::config::{ConfigResult, Pattern, ValidationConfig, ValidationKind};
use super::host::FieldAccess;

/// Error shown when a required field is empty
pub const REQUIRED_MESSAGE: &str = "Required! ";
/// Error shown when the text does not match the pattern
pub const PATTERN_MESSAGE: &str = "Not match to pattern!!";

/// Error shown when a number is outside `[min, max]`
pub fn range_message(min: f64, max: f64) -> String {
    format!("Range is {} to {} !!", format_bound(min), format_bound(max))
}

/// Render a bound without a trailing `.0` when it is a whole number.
pub fn format_bound(value: f64) -> String {
    if value == value.round() {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Numeric value compared against a range default.
///
/// A whole number is re-read from the integer part of its text; anything
/// else keeps the parsed value.
fn collapse_to_integer(text: &str, value: f64) -> f64 {
    if value != value.round() {
        return value;
    }
    text.trim()
        .split('.')
        .next()
        .and_then(|int_part| int_part.parse::<f64>().ok())
        .unwrap_or(value)
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Validates one field's content against its configuration.
#[derive(Debug, Clone)]
pub struct Validator {
    id: String,
    config: ValidationConfig,
}

impl Validator {
    pub fn new(id: impl Into<String>, config: ValidationConfig) -> Self {
        Self {
            id: id.into(),
            config,
        }
    }

    /// Field identifier used in logs
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn required(&self) -> bool {
        self.config.required
    }

    pub fn pattern(&self) -> Option<&str> {
        self.config.pattern.as_ref().map(Pattern::as_str)
    }

    pub fn kind(&self) -> &ValidationKind {
        &self.config.kind
    }

    pub fn set_required(&mut self, required: bool) {
        self.config.required = required;
    }

    /// Replace the pattern. On error the old pattern is kept.
    pub fn set_pattern(&mut self, pattern: Option<&str>) -> ConfigResult<()> {
        self.config.pattern = pattern.map(Pattern::new).transpose()?;
        Ok(())
    }

    pub fn set_kind(&mut self, kind: ValidationKind) {
        self.config.kind = kind;
    }

    fn fail<F: FieldAccess + ?Sized>(&self, field: &mut F, message: String) -> bool {
        tracing::info!(field = %self.id, "{}", message.trim_end());
        field.set_error(Some(message));
        field.set_focusable(true);
        field.request_focus();
        false
    }

    /// Passes unless the field is required and empty.
    pub fn is_non_empty<F: FieldAccess + ?Sized>(&self, field: &mut F) -> bool {
        field.set_error(None);
        if !self.config.required {
            return true;
        }
        if field.text().is_empty() {
            return self.fail(field, REQUIRED_MESSAGE.to_string());
        }
        field.set_error(None);
        true
    }

    /// Range check for type 1 fields; every other type passes.
    ///
    /// A number outside `[min, max]` still passes when it equals the
    /// configured range default (after integer collapse).
    pub fn is_in_range<F: FieldAccess + ?Sized>(&self, field: &mut F) -> bool {
        field.set_error(None);
        let ValidationKind::Range { min, max, default } = self.config.kind else {
            return true;
        };
        if !self.config.required {
            return true;
        }
        if !self.is_non_empty(field) || !self.matches_pattern(field) {
            return false;
        }

        let text = field.text();
        let in_range = match parse_number(&text) {
            Some(value) if value < min || value > max => {
                if default.is_some_and(|d| collapse_to_integer(&text, value) == d) {
                    tracing::debug!(field = %self.id, value, "range default accepted");
                    return true;
                }
                false
            }
            Some(_) => true,
            None => false,
        };
        if !in_range {
            return self.fail(field, range_message(min, max));
        }

        field.set_error(None);
        true
    }

    /// Pattern check where a type 2 field may instead equal its default.
    pub fn is_equal_to_pattern_or_default<F: FieldAccess + ?Sized>(&self, field: &mut F) -> bool {
        field.set_error(None);
        if !self.config.required {
            return true;
        }
        if !self.is_non_empty(field) {
            return false;
        }
        if !self.matches_pattern(field) {
            let ValidationKind::EqualsOrPattern { default } = &self.config.kind else {
                return false;
            };
            if field.text() != *default {
                return false;
            }
        }

        field.set_error(None);
        true
    }

    /// Run the entry point that fits this field's type.
    pub fn validate_all<F: FieldAccess + ?Sized>(&self, field: &mut F) -> bool {
        match self.config.kind {
            ValidationKind::Range { .. } => self.is_in_range(field),
            _ => self.is_equal_to_pattern_or_default(field),
        }
    }

    /// Shared pattern check: passes with no pattern, else needs a full match.
    pub fn matches_pattern<F: FieldAccess + ?Sized>(&self, field: &mut F) -> bool {
        let Some(pattern) = &self.config.pattern else {
            return true;
        };
        if !pattern.is_full_match(&field.text()) {
            return self.fail(field, PATTERN_MESSAGE.to_string());
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct StubField {
        text: String,
        error: Option<String>,
        focus_requests: usize,
        focusable: bool,
    }

    impl StubField {
        fn with_text(text: &str) -> Self {
            Self {
                text: text.to_string(),
                ..Self::default()
            }
        }
    }

    impl FieldAccess for StubField {
        fn text(&self) -> String {
            self.text.clone()
        }

        fn error(&self) -> Option<&str> {
            self.error.as_deref()
        }

        fn set_error(&mut self, message: Option<String>) {
            self.error = message;
        }

        fn request_focus(&mut self) {
            self.focus_requests += 1;
        }

        fn set_focusable(&mut self, focusable: bool) {
            self.focusable = focusable;
        }
    }

    fn range_validator(min: f64, max: f64, default: Option<f64>) -> Validator {
        Validator::new(
            "amount",
            ValidationConfig::new(ValidationKind::Range { min, max, default }),
        )
    }

    #[test]
    fn test_format_bound() {
        assert_eq!(format_bound(0.0), "0");
        assert_eq!(format_bound(10.0), "10");
        assert_eq!(format_bound(-3.0), "-3");
        assert_eq!(format_bound(2.5), "2.5");
    }

    #[test]
    fn test_collapse_to_integer() {
        assert_eq!(collapse_to_integer("-5.0", -5.0), -5.0);
        assert_eq!(collapse_to_integer("12", 12.0), 12.0);
        assert_eq!(collapse_to_integer("2.5", 2.5), 2.5);
    }

    #[test]
    fn test_non_empty_required() {
        let validator = Validator::new("name", ValidationConfig::default());
        let mut field = StubField::default();

        assert!(!validator.is_non_empty(&mut field));
        assert_eq!(field.error(), Some(REQUIRED_MESSAGE));
        assert_eq!(field.focus_requests, 1);
        assert!(field.focusable);

        field.text = "x".to_string();
        assert!(validator.is_non_empty(&mut field));
        assert_eq!(field.error(), None);
    }

    #[test]
    fn test_non_empty_not_required_always_passes() {
        let validator = Validator::new("name", ValidationConfig::default().required(false));
        let mut field = StubField::default();
        assert!(validator.is_non_empty(&mut field));
        assert_eq!(field.focus_requests, 0);
    }

    #[test]
    fn test_range_in_and_out() {
        let validator = range_validator(0.0, 10.0, None);

        let mut field = StubField::with_text("5");
        assert!(validator.is_in_range(&mut field));
        assert_eq!(field.error(), None);

        let mut field = StubField::with_text("15");
        assert!(!validator.is_in_range(&mut field));
        assert_eq!(field.error(), Some("Range is 0 to 10 !!"));
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let validator = range_validator(0.0, 10.0, None);
        assert!(validator.is_in_range(&mut StubField::with_text("0")));
        assert!(validator.is_in_range(&mut StubField::with_text("10")));
        assert!(!validator.is_in_range(&mut StubField::with_text("10.01")));
    }

    #[test]
    fn test_range_fractional_bounds_render() {
        let validator = range_validator(0.5, 9.75, None);
        let mut field = StubField::with_text("10");
        assert!(!validator.is_in_range(&mut field));
        assert_eq!(field.error(), Some("Range is 0.5 to 9.75 !!"));
    }

    #[test]
    fn test_range_default_escape() {
        let validator = range_validator(0.0, 10.0, Some(-5.0));
        let mut field = StubField::with_text("-5");
        assert!(validator.is_in_range(&mut field));
        assert_eq!(field.error(), None);

        let mut field = StubField::with_text("-5.0");
        assert!(validator.is_in_range(&mut field));

        let mut field = StubField::with_text("-6");
        assert!(!validator.is_in_range(&mut field));
    }

    #[test]
    fn test_range_non_numeric_fails_with_range_message() {
        let validator = range_validator(1.0, 3.0, None);
        let mut field = StubField::with_text("abc");
        assert!(!validator.is_in_range(&mut field));
        assert_eq!(field.error(), Some("Range is 1 to 3 !!"));
    }

    #[test]
    fn test_range_skipped_for_other_types_and_optional() {
        let validator = Validator::new("x", ValidationConfig::default());
        assert!(validator.is_in_range(&mut StubField::with_text("999")));

        let validator = Validator::new(
            "x",
            ValidationConfig::new(ValidationKind::range(0.0, 1.0)).required(false),
        );
        assert!(validator.is_in_range(&mut StubField::default()));
    }

    #[test]
    fn test_range_runs_required_and_pattern_first() {
        let validator = Validator::new(
            "x",
            ValidationConfig::new(ValidationKind::range(0.0, 100.0))
                .with_pattern("[0-9]+")
                .unwrap(),
        );

        let mut field = StubField::default();
        assert!(!validator.is_in_range(&mut field));
        assert_eq!(field.error(), Some(REQUIRED_MESSAGE));

        let mut field = StubField::with_text("5.5");
        assert!(!validator.is_in_range(&mut field));
        assert_eq!(field.error(), Some(PATTERN_MESSAGE));
    }

    #[test]
    fn test_equals_default_escapes_pattern() {
        let validator = Validator::new(
            "code",
            ValidationConfig::new(ValidationKind::equals_or_pattern("N/A"))
                .with_pattern("[0-9]+")
                .unwrap(),
        );

        let mut field = StubField::with_text("N/A");
        assert!(validator.is_equal_to_pattern_or_default(&mut field));
        assert_eq!(field.error(), None);

        let mut field = StubField::with_text("n/a");
        assert!(!validator.is_equal_to_pattern_or_default(&mut field));
        assert_eq!(field.error(), Some(PATTERN_MESSAGE));

        let mut field = StubField::with_text("42");
        assert!(validator.is_equal_to_pattern_or_default(&mut field));
    }

    #[test]
    fn test_pattern_failure_without_equals_type_is_hard_fail() {
        let validator =
            Validator::new("code", ValidationConfig::default().with_pattern("[0-9]+").unwrap());
        let mut field = StubField::with_text("N/A");
        assert!(!validator.is_equal_to_pattern_or_default(&mut field));
        assert_eq!(field.error(), Some(PATTERN_MESSAGE));
    }

    #[test]
    fn test_entry_points_are_idempotent() {
        let validator = range_validator(0.0, 10.0, None);
        let mut field = StubField::with_text("15");

        let first = validator.is_in_range(&mut field);
        let first_error = field.error().map(str::to_string);
        let second = validator.is_in_range(&mut field);
        assert_eq!(first, second);
        assert_eq!(field.error().map(str::to_string), first_error);
    }

    #[test]
    fn test_set_pattern_keeps_old_on_error() {
        let mut validator = Validator::new("x", ValidationConfig::default());
        validator.set_pattern(Some("[a-z]+")).unwrap();
        assert!(validator.set_pattern(Some("(")).is_err());
        assert_eq!(validator.pattern(), Some("[a-z]+"));

        validator.set_pattern(None).unwrap();
        assert_eq!(validator.pattern(), None);
    }

    #[test]
    fn test_validate_all_dispatches_on_kind() {
        let validator = range_validator(0.0, 10.0, None);
        assert!(!validator.validate_all(&mut StubField::with_text("11")));

        let validator = Validator::new("x", ValidationConfig::default());
        assert!(!validator.validate_all(&mut StubField::default()));
        assert!(validator.validate_all(&mut StubField::with_text("anything")));
    }
}
