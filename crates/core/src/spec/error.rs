//! Spec rejection reasons.
//!
//! Every variant renders the exact user-facing message surfaced in the
//! API's `errors` list; none of these are unrecoverable faults.

use serde::Serialize;
use serde_json::Value;

/// A single reason a spec was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpecViolation {
    /// Creation payload carries keys outside the entity's allow-list.
    #[error("Unallowed creation fields of spec are requested: {fields}.")]
    UnallowedCreationFields { fields: String },

    /// An envelope without the `entityData` key (or with a non-object one).
    #[error("\"entityData\" field must be set.")]
    MissingEntityData,

    /// `identifyBy` was not a JSON array.
    #[error("\"identifyBy\" field must be array.")]
    IdentifyByNotArray,

    /// `identifyBy` contained a non-string element.
    #[error("\"identifyBy\" field must contain only strings.")]
    IdentifyByNotStrings,

    /// `identifyBy` was an empty array.
    #[error("At least one identifying value must be set.")]
    NoIdentifyingValue,

    /// The requested identifying field combination is not whitelisted.
    #[error("Unallowed identifying fields of entity are requested.")]
    UnallowedIdentifyingFields,

    /// An identifying field is missing from `entityData`.
    #[error("Identifying fields of entity must be present.")]
    IdentifyingFieldsAbsent,

    /// An identifying value was JSON null.
    #[error("Identifying data must not be null.")]
    NullIdentifyingData,

    /// No entity matches the identifying data.
    #[error("Entity for this spec not found.")]
    EntityNotFound,

    /// A relation-reference field was not a JSON array.
    #[error("\"{field}\" field must be an array.")]
    RelationFieldNotArray { field: &'static str },

    /// A relation reference points at a related entity that does not exist.
    #[error("No {entity} with eId {reference}.")]
    UnresolvedRelation {
        entity: &'static str,
        reference: String,
    },

    /// A business-rule violation reported by the entity validator.
    #[error("{0}")]
    Validation(String),
}

/// Ordered rejection reasons for one spec. Empty means the spec passed
/// every gate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecError {
    violations: Vec<SpecViolation>,
}

impl SpecError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: SpecViolation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[SpecViolation] {
        &self.violations
    }

    /// Render all violations to user-facing strings, in gate order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

impl From<SpecViolation> for SpecError {
    fn from(violation: SpecViolation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

/// A rejected batch item: the spec exactly as the client sent it, paired
/// with its rejection messages.
#[derive(Debug, Clone, Serialize)]
pub struct SpecItemError {
    #[serde(rename = "entitySpec")]
    pub entity_spec: Value,
    pub errors: Vec<String>,
}
