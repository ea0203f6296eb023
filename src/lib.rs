//! maskfield - masked, validated input fields
//!
//! This crate provides the core types and logic for a single-line input
//! field that auto-inserts mask literals while the user types and validates
//! its content on demand.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod field;
pub mod mask;
pub mod report;
pub mod tracing;
pub mod validation;

// Re-export commonly used types
pub use config::{FieldAttributes, FieldConfig, FieldsConfig};
pub use field::{update, Check, FieldEvent, FieldMsg, MaskedField};
pub use mask::{compute_insertion, MaskEngine, MaskTemplate};
pub use validation::{ConfigError, FieldAccess, ValidationConfig, ValidationKind, Validator};
