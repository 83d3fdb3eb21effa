//! Declarative field rules shared by create and update.

use serde::{Deserialize, Serialize};

use crate::models::{DeveloperFields, DeveloperInput, Role};

/// Kind of rule a field failed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Required,
    OneOf,
    AtLeast,
}

/// A single failed rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub rule: Rule,
    pub message: String,
}

impl Violation {
    pub fn new(field: &str, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            rule,
            message: message.into(),
        }
    }
}

enum Check {
    Required,
    OneOf(&'static [&'static str]),
    AtLeast(i64),
}

struct FieldRule {
    field: &'static str,
    check: Check,
}

const ROLE_NAMES: &[&str] = &["Frontend", "Backend", "Full-Stack"];

/// Rules are evaluated in order. Once a field fails, its later rules are skipped.
const DEVELOPER_RULES: &[FieldRule] = &[
    FieldRule { field: "name", check: Check::Required },
    FieldRule { field: "role", check: Check::Required },
    FieldRule { field: "role", check: Check::OneOf(ROLE_NAMES) },
    FieldRule { field: "tech_stack", check: Check::Required },
    FieldRule { field: "experience", check: Check::Required },
    FieldRule { field: "experience", check: Check::AtLeast(0) },
];

enum FieldValue<'a> {
    Text(Option<&'a str>),
    Int(Option<i64>),
}

fn field_value<'a>(input: &'a DeveloperInput, field: &str) -> FieldValue<'a> {
    match field {
        "name" => FieldValue::Text(input.name.as_deref()),
        "role" => FieldValue::Text(input.role.as_deref()),
        "tech_stack" => FieldValue::Text(input.tech_stack.as_deref()),
        "experience" => FieldValue::Int(input.experience),
        _ => FieldValue::Text(None),
    }
}

fn evaluate(rule: &FieldRule, value: &FieldValue<'_>) -> Option<Violation> {
    let failed = match (&rule.check, value) {
        (Check::Required, FieldValue::Text(v)) => v.map_or(true, |s| s.trim().is_empty()),
        (Check::Required, FieldValue::Int(v)) => v.is_none(),
        (Check::OneOf(allowed), FieldValue::Text(Some(s))) => !allowed.iter().any(|a| a == s),
        (Check::AtLeast(min), FieldValue::Int(Some(n))) => n < min,
        _ => false,
    };

    if !failed {
        return None;
    }

    let violation = match rule.check {
        Check::Required => Violation::new(
            rule.field,
            Rule::Required,
            format!("Missing required field: {}", rule.field),
        ),
        Check::OneOf(_) => Violation::new(rule.field, Rule::OneOf, "Invalid role"),
        Check::AtLeast(min) => Violation::new(
            rule.field,
            Rule::AtLeast,
            format!("Experience must be {} or greater", min),
        ),
    };
    Some(violation)
}

/// Check every rule and return all violations, in rule order.
pub fn violations(input: &DeveloperInput) -> Vec<Violation> {
    let mut out: Vec<Violation> = Vec::new();
    for rule in DEVELOPER_RULES {
        if out.iter().any(|v| v.field == rule.field) {
            continue;
        }
        if let Some(v) = evaluate(rule, &field_value(input, rule.field)) {
            out.push(v);
        }
    }
    out
}

/// Validate a payload into the fields of a developer.
///
/// Either every field is accepted or none are.
pub fn validate(input: &DeveloperInput) -> Result<DeveloperFields, Vec<Violation>> {
    let found = violations(input);
    if !found.is_empty() {
        return Err(found);
    }

    let fields = (|| {
        Some(DeveloperFields {
            name: input.name.clone()?,
            role: Role::parse(input.role.as_deref()?)?,
            tech_stack: input.tech_stack.clone()?,
            experience: u64::try_from(input.experience?).ok()?,
        })
    })();

    // Unreachable while the rule table covers every field.
    fields.ok_or_else(|| vec![Violation::new("body", Rule::Required, "Invalid developer payload")])
}
