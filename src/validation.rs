//! Field-level validation of raw JSON request bodies.
//!
//! Rules are checked against the untyped [`serde_json::Value`] so that a
//! wrong JSON type is reported as a violation instead of failing
//! deserialization outright. Each offending field yields exactly one
//! [`FieldViolation`], which may carry several [`RuleFailure`]s.

use serde_json::Value;
use std::fmt;

/// Pseudo-field used when the body itself is unusable.
pub const BODY_FIELD: &str = "body";

/// Expected JSON type and bounds for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// A string whose length in chars lies in `min_len..=max_len`.
    Text { min_len: usize, max_len: usize },
    /// Any JSON number.
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: FieldKind,
}

impl FieldRule {
    pub const fn text(field: &'static str, min_len: usize, max_len: usize) -> Self {
        Self {
            field,
            kind: FieldKind::Text { min_len, max_len },
        }
    }

    pub const fn number(field: &'static str) -> Self {
        Self {
            field,
            kind: FieldKind::Number,
        }
    }
}

/// Whether absent fields are an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every rule's field must be present and non-null.
    Create,
    /// Missing or null fields are skipped.
    Update,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RuleFailure {
    Required,
    Empty,
    NotString,
    NotNumber,
    TooShort { min: usize },
    TooLong { max: usize },
    NotAnObject,
}

impl RuleFailure {
    /// Render the failure for a given field, e.g. `name must be a string`.
    pub fn describe(&self, field: &str) -> String {
        match self {
            RuleFailure::Required => format!("{field} is required"),
            RuleFailure::Empty => format!("{field} should not be empty"),
            RuleFailure::NotString => format!("{field} must be a string"),
            RuleFailure::NotNumber => format!("{field} must be a number"),
            RuleFailure::TooShort { min } => {
                format!("{field} must be longer than or equal to {min} characters")
            }
            RuleFailure::TooLong { max } => {
                format!("{field} must be shorter than or equal to {max} characters")
            }
            RuleFailure::NotAnObject => format!("{field} must be a JSON object"),
        }
    }
}

/// All failures recorded against a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub failures: Vec<RuleFailure>,
}

impl FieldViolation {
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.failures.iter().map(|f| f.describe(self.field))
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.messages().collect();
        write!(f, "{}", messages.join(", "))
    }
}

/// Check `candidate` against `rules`. Returns one violation per offending field.
pub fn validate(
    candidate: &Value,
    rules: &[FieldRule],
    mode: Mode,
) -> Result<(), Vec<FieldViolation>> {
    let Some(object) = candidate.as_object() else {
        return Err(vec![FieldViolation {
            field: BODY_FIELD,
            failures: vec![RuleFailure::NotAnObject],
        }]);
    };

    let violations: Vec<FieldViolation> = rules
        .iter()
        .filter_map(|rule| {
            let failures = check_field(object.get(rule.field), rule.kind, mode);
            (!failures.is_empty()).then_some(FieldViolation {
                field: rule.field,
                failures,
            })
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_field(value: Option<&Value>, kind: FieldKind, mode: Mode) -> Vec<RuleFailure> {
    let value = match value {
        None | Some(Value::Null) => {
            return match mode {
                Mode::Create => vec![RuleFailure::Required],
                Mode::Update => Vec::new(),
            };
        }
        Some(value) => value,
    };

    match kind {
        FieldKind::Number => {
            if value.is_number() {
                Vec::new()
            } else {
                vec![RuleFailure::NotNumber]
            }
        }
        FieldKind::Text { min_len, max_len } => {
            // A type mismatch is reported alone; bounds only apply to strings.
            let Some(text) = value.as_str() else {
                return vec![RuleFailure::NotString];
            };
            let len = text.chars().count();
            let mut failures = Vec::new();
            if len == 0 {
                failures.push(RuleFailure::Empty);
            }
            if len < min_len {
                failures.push(RuleFailure::TooShort { min: min_len });
            }
            if len > max_len {
                failures.push(RuleFailure::TooLong { max: max_len });
            }
            failures
        }
    }
}
