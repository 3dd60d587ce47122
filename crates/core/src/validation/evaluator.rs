//! Rule evaluation -- pure logic, no storage access.

use serde_json::Value;

use crate::entity::EntityType;
use crate::types::SpecMap;

use super::rules::{rules_for, FieldRule, RuleCheck, GROUP_DEFAULT};

/// Evaluate an entity type's rule set against a raw field map.
///
/// `groups = None` evaluates the `Default` group (whole-object
/// validation of a creation payload); a non-empty group list restricts
/// evaluation to rules tagged with any of the names. Violation messages
/// come back in rule-table order; an empty list means the data is valid.
pub fn validation_error_messages(
    entity_type: EntityType,
    data: &SpecMap,
    groups: Option<&[&str]>,
) -> Vec<String> {
    let groups = groups.unwrap_or(&[GROUP_DEFAULT]);
    rules_for(entity_type)
        .iter()
        .filter(|rule| in_any_group(rule, groups))
        .filter(|rule| violates(rule.check, data.get(rule.field)))
        .map(|rule| rule.message.to_string())
        .collect()
}

/// Validate one field's value against the rules of that field's own
/// group. The building block of incremental validation: partial updates
/// run this per supplied field instead of whole-object validation.
pub fn validate_field(entity_type: EntityType, field: &str, value: Option<&Value>) -> Vec<String> {
    rules_for(entity_type)
        .iter()
        .filter(|rule| rule.field == field && rule.groups.iter().any(|g| *g == field))
        .filter(|rule| violates(rule.check, value))
        .map(|rule| rule.message.to_string())
        .collect()
}

fn in_any_group(rule: &FieldRule, groups: &[&str]) -> bool {
    rule.groups
        .iter()
        .any(|rule_group| groups.iter().any(|g| g == rule_group))
}

fn violates(check: RuleCheck, value: Option<&Value>) -> bool {
    match check {
        RuleCheck::NotNull => matches!(value, None | Some(Value::Null)),
        RuleCheck::TypeString => {
            matches!(value, Some(v) if !v.is_null() && !v.is_string())
        }
        RuleCheck::TypeInt => {
            matches!(value, Some(v) if !v.is_null() && !v.is_i64() && !v.is_u64())
        }
        RuleCheck::TypeFloat => {
            matches!(value, Some(v) if !v.is_null() && !v.is_f64())
        }
        RuleCheck::MinLength(min) => {
            matches!(value, Some(Value::String(s)) if s.chars().count() < min)
        }
        RuleCheck::MaxLength(max) => {
            matches!(value, Some(Value::String(s)) if s.chars().count() > max)
        }
        RuleCheck::Range { min, max } => value
            .filter(|v| v.is_f64())
            .and_then(Value::as_f64)
            .map(|n| n < min || n > max)
            .unwrap_or(false),
    }
}
