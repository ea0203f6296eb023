//! Validation reports printed by the command-line tool.

use std::fmt;

use serde::Serialize;

use crate::field::{update, Check, FieldEvent, FieldMsg, MaskedField};

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub check: Check,
    pub passed: bool,
    pub error: Option<String>,
}

/// Field content plus the outcome of every requested check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    pub field: String,
    pub text: String,
    pub mask: Option<String>,
    pub checks: Vec<CheckReport>,
}

impl FieldReport {
    /// Run `checks` in order against the field's current content
    pub fn run(field: &mut MaskedField, checks: &[Check]) -> Self {
        let checks = checks
            .iter()
            .filter_map(|&check| match update(field, FieldMsg::Validate(check)) {
                Some(FieldEvent::Validated {
                    check,
                    passed,
                    error,
                }) => Some(CheckReport {
                    check,
                    passed,
                    error,
                }),
                _ => None,
            })
            .collect();

        Self {
            field: field.id().to_string(),
            text: field.text(),
            mask: field.mask().map(|m| m.template().as_str().to_string()),
            checks,
        }
    }

    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Check::NonEmpty => "non-empty",
            Check::Range => "range",
            Check::EqualsOrPattern => "pattern",
            Check::All => "all",
        };
        f.pad(name)
    }
}

impl fmt::Display for FieldReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {:?}", self.field, self.text)?;
        if let Some(mask) = &self.mask {
            writeln!(f, "  mask: {}", mask)?;
        }
        for check in &self.checks {
            let status = if check.passed { "ok" } else { "FAIL" };
            match &check.error {
                Some(error) => writeln!(f, "  {:<10} {} ({})", check.check, status, error.trim_end())?,
                None => writeln!(f, "  {:<10} {}", check.check, status)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldAttributes;

    #[test]
    fn test_report_collects_checks_in_order() {
        let attrs = FieldAttributes {
            mask: Some("###-###".to_string()),
            pattern: Some("[0-9]{3}-[0-9]{3}".to_string()),
            ..FieldAttributes::default()
        };
        let mut field = MaskedField::from_attributes("phone", &attrs).unwrap();
        field.type_text("1234");

        let report = FieldReport::run(&mut field, &[Check::NonEmpty, Check::EqualsOrPattern]);
        assert_eq!(report.text, "123-4");
        assert_eq!(report.mask.as_deref(), Some("###-###"));
        assert!(report.checks[0].passed);
        assert!(!report.checks[1].passed);
        assert!(!report.passed());
    }

    #[test]
    fn test_display() {
        let report = FieldReport {
            field: "qty".to_string(),
            text: "15".to_string(),
            mask: None,
            checks: vec![CheckReport {
                check: Check::Range,
                passed: false,
                error: Some("Range is 0 to 10 !!".to_string()),
            }],
        };
        assert_eq!(
            report.to_string(),
            "qty: \"15\"\n  range      FAIL (Range is 0 to 10 !!)\n"
        );
    }

    #[test]
    fn test_json_shape() {
        let report = FieldReport {
            field: "name".to_string(),
            text: String::new(),
            mask: None,
            checks: vec![CheckReport {
                check: Check::NonEmpty,
                passed: false,
                error: Some("Required! ".to_string()),
            }],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["checks"][0]["check"], "non-empty");
        assert_eq!(json["checks"][0]["error"], "Required! ");
    }
}
