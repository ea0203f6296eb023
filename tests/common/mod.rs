//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use maskfield::editable::TextEditMsg;
use maskfield::{FieldAttributes, MaskedField, ValidationKind};

/// A field with the given mask and no other constraints
pub fn masked_field(mask: &str) -> MaskedField {
    let attrs = FieldAttributes {
        mask: Some(mask.to_string()),
        ..FieldAttributes::default()
    };
    MaskedField::from_attributes("masked", &attrs).expect("mask-only field is valid")
}

/// A type 1 field with the given bounds and optional range default
pub fn range_field(min: f64, max: f64, default: Option<f64>) -> MaskedField {
    let attrs = FieldAttributes {
        type_code: 1,
        min_value: Some(min),
        max_value: Some(max),
        default_value: default.map(maskfield::config::AttributeValue::from),
        ..FieldAttributes::default()
    };
    MaskedField::from_attributes("range", &attrs).expect("range field is valid")
}

/// A type 2 field with the given pattern and default
pub fn equals_field(pattern: &str, default: &str) -> MaskedField {
    let attrs = FieldAttributes {
        type_code: 2,
        pattern: Some(pattern.to_string()),
        default_value: Some(maskfield::config::AttributeValue::new(default)),
        ..FieldAttributes::default()
    };
    let field = MaskedField::from_attributes("equals", &attrs).expect("equals field is valid");
    assert_eq!(
        field.validator().kind(),
        &ValidationKind::equals_or_pattern(default)
    );
    field
}

/// A field holding `text`, set programmatically
pub fn field_with_text(mut field: MaskedField, text: &str) -> MaskedField {
    field.set_text(text);
    field
}

/// Press backspace `n` times
pub fn backspace(field: &mut MaskedField, n: usize) {
    for _ in 0..n {
        field.edit(&TextEditMsg::DeleteBackward);
    }
}
