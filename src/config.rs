//! Field configuration files
//!
//! Fields are declared by name in `~/.config/maskfield/fields.yaml` (or any
//! file passed on the command line), using the same attribute names a markup
//! layer would:
//!
//! ```yaml
//! fields:
//!   phone:
//!     mask: "###-###"
//!     pattern: "[0-9]{3}-[0-9]{3}"
//!   quantity:
//!     type: 1
//!     minValue: 0
//!     maxValue: 10
//!     defaultValue: -1
//!   code:
//!     type: 2
//!     pattern: "[0-9]+"
//!     defaultValue: "N/A"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::mask::MaskTemplate;
use crate::validation::{ConfigError, ConfigResult, ValidationConfig, ValidationKind};

/// A `defaultValue` attribute, kept as written.
///
/// Any YAML scalar is accepted and stored as its source text, so an unquoted
/// `1.50` stays `1.50` for an equals field. Range fields parse it as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeValue(String);

impl AttributeValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn as_number(&self) -> ConfigResult<f64> {
        self.0
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidRangeDefault(self.0.clone()))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for AttributeValue {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Raw field attributes, as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAttributes {
    #[serde(default = "default_required")]
    pub required: bool,

    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default)]
    pub mask: Option<String>,

    /// 0 = none, 1 = range, 2 = equals-or-pattern
    #[serde(rename = "type", default)]
    pub type_code: i64,

    #[serde(default)]
    pub min_value: Option<f64>,

    #[serde(default)]
    pub max_value: Option<f64>,

    #[serde(default)]
    pub default_value: Option<AttributeValue>,
}

fn default_required() -> bool {
    true
}

impl Default for FieldAttributes {
    fn default() -> Self {
        Self {
            required: default_required(),
            pattern: None,
            mask: None,
            type_code: 0,
            min_value: None,
            max_value: None,
            default_value: None,
        }
    }
}

impl FieldAttributes {
    /// Build the validation policy, failing on missing mandatory attributes.
    pub fn validation_kind(&self) -> ConfigResult<ValidationKind> {
        match self.type_code {
            0 => Ok(ValidationKind::None),
            1 => {
                let min = self.min_value.ok_or(ConfigError::MissingMinValue)?;
                let max = self.max_value.ok_or(ConfigError::MissingMaxValue)?;
                let kind = match &self.default_value {
                    Some(default) => {
                        ValidationKind::range_with_default(min, max, default.as_number()?)
                    }
                    None => ValidationKind::range(min, max),
                };
                Ok(kind)
            }
            2 => {
                let default = self
                    .default_value
                    .as_ref()
                    .ok_or(ConfigError::MissingDefaultValue)?;
                Ok(ValidationKind::equals_or_pattern(default.as_str()))
            }
            other => Err(ConfigError::UnknownType(other)),
        }
    }

    pub fn validation_config(&self) -> ConfigResult<ValidationConfig> {
        let config = ValidationConfig::new(self.validation_kind()?).required(self.required);
        match &self.pattern {
            Some(pattern) => config.with_pattern(pattern),
            None => Ok(config),
        }
    }
}

/// A fully checked field configuration.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub id: String,
    pub mask: Option<MaskTemplate>,
    pub validation: ValidationConfig,
}

impl FieldConfig {
    /// Check attributes. Any missing mandatory attribute fails here, so a
    /// half-configured field never exists.
    pub fn from_attributes(id: impl Into<String>, attrs: &FieldAttributes) -> ConfigResult<Self> {
        let id = id.into();
        let validation = attrs.validation_config().inspect_err(|e| {
            tracing::error!(field = %id, "invalid field configuration: {}", e);
        })?;
        Ok(Self {
            mask: attrs.mask.as_deref().and_then(MaskTemplate::parse),
            id,
            validation,
        })
    }
}

/// Root structure of a fields YAML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldsConfig {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldAttributes>,
}

impl FieldsConfig {
    /// Load fields from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fields config {}", path.display()))?;
        let config = parse_fields_yaml(&content)
            .with_context(|| format!("Failed to parse fields config {}", path.display()))?;
        tracing::info!(
            "Loaded {} field(s) from {}",
            config.fields.len(),
            path.display()
        );
        Ok(config)
    }

    /// Load from the default location, or an empty set if it does not exist
    pub fn load_default() -> Result<Self> {
        let Some(path) = crate::config_paths::fields_file() else {
            tracing::debug!("No config directory available, no fields configured");
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!("Fields file not found at {}", path.display());
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Checked configuration for a named field
    pub fn field(&self, name: &str) -> Result<FieldConfig> {
        let attrs = self
            .fields
            .get(name)
            .with_context(|| format!("Unknown field {name:?}"))?;
        FieldConfig::from_attributes(name, attrs)
            .with_context(|| format!("Field {name:?} is misconfigured"))
    }
}

/// Parse fields from a YAML string
pub fn parse_fields_yaml(yaml: &str) -> Result<FieldsConfig> {
    Ok(serde_yaml::from_str(yaml)?)
}
