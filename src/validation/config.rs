//! Validation configuration and construction errors.

use regex::Regex;
use thiserror::Error;

/// Errors that make a field configuration unusable.
///
/// These are raised while building a configuration, never while validating.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Range validation without a lower bound
    #[error("Min value not provided")]
    MissingMinValue,

    /// Range validation without an upper bound
    #[error("Max value not provided")]
    MissingMaxValue,

    /// Equals-or-pattern validation without a default
    #[error("Default value not provided")]
    MissingDefaultValue,

    /// Range default that is not a number
    #[error("Range default value is not a number: {0:?}")]
    InvalidRangeDefault(String),

    /// Type code outside {0, 1, 2}
    #[error("Unknown validation type {0} (expected 0, 1 or 2)")]
    UnknownType(i64),

    /// Pattern that does not compile
    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for configuration construction
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// A compiled full-match pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `pattern` so that it must match the whole text.
    pub fn new(pattern: &str) -> ConfigResult<Self> {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as configured
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True if the entire text matches
    pub fn is_full_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Type-specific validation policy.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ValidationKind {
    /// Type 0: only the required gate and pattern apply
    #[default]
    None,
    /// Type 1: numeric range with an optional escape value
    Range {
        min: f64,
        max: f64,
        /// Exempt from the bounds check (see `Validator::is_in_range`)
        default: Option<f64>,
    },
    /// Type 2: pattern match, or verbatim equality with `default`
    EqualsOrPattern { default: String },
}

impl ValidationKind {
    pub fn range(min: f64, max: f64) -> Self {
        ValidationKind::Range {
            min,
            max,
            default: None,
        }
    }

    pub fn range_with_default(min: f64, max: f64, default: f64) -> Self {
        ValidationKind::Range {
            min,
            max,
            default: Some(default),
        }
    }

    pub fn equals_or_pattern(default: impl Into<String>) -> Self {
        ValidationKind::EqualsOrPattern {
            default: default.into(),
        }
    }
}

/// Everything a `Validator` needs to know about one field.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    pub required: bool,
    pub pattern: Option<Pattern>,
    pub kind: ValidationKind,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            required: true,
            pattern: None,
            kind: ValidationKind::None,
        }
    }
}

impl ValidationConfig {
    pub fn new(kind: ValidationKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Attach a pattern; fails if it does not compile
    pub fn with_pattern(mut self, pattern: &str) -> ConfigResult<Self> {
        self.pattern = Some(Pattern::new(pattern)?);
        Ok(self)
    }
}
