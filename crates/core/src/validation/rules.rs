//! Validation rule tables.
//!
//! Rules carry validation groups: `Default` is the whole-object group
//! run on creation, and each field name doubles as the group used when
//! that field is validated on its own (partial updates, relation
//! references).

use crate::entity::EntityType;

/// The whole-object validation group.
pub const GROUP_DEFAULT: &str = "Default";

/// A single value check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleCheck {
    /// JSON string. Absent/null values pass (presence is `NotNull`'s job).
    TypeString,
    /// JSON integer literal.
    TypeInt,
    /// JSON number with a fractional representation; integer literals
    /// fail, matching the wire contract's strict float typing.
    TypeFloat,
    /// Present and not JSON null.
    NotNull,
    /// Inclusive minimum string length. Non-string values pass.
    MinLength(usize),
    /// Inclusive maximum string length. Non-string values pass.
    MaxLength(usize),
    /// Inclusive numeric range over float values.
    Range { min: f64, max: f64 },
}

/// A field validation rule: the check, the groups it runs in, and the
/// message a violation surfaces to the client.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub groups: &'static [&'static str],
    pub check: RuleCheck,
    pub message: &'static str,
}

const PRODUCT_RULES: &[FieldRule] = &[
    FieldRule {
        field: "id",
        groups: &["id"],
        check: RuleCheck::TypeInt,
        message: "Product id must be of int type.",
    },
    FieldRule {
        field: "id",
        groups: &["id"],
        check: RuleCheck::NotNull,
        message: "Product id must not be null.",
    },
    FieldRule {
        field: "title",
        groups: &[GROUP_DEFAULT, "title"],
        check: RuleCheck::TypeString,
        message: "Product title must be of string type.",
    },
    FieldRule {
        field: "title",
        groups: &[GROUP_DEFAULT, "title"],
        check: RuleCheck::MaxLength(12),
        message: "Product title must have 12 characters or less.",
    },
    FieldRule {
        field: "title",
        groups: &[GROUP_DEFAULT, "title"],
        check: RuleCheck::MinLength(3),
        message: "Product title must have 3 characters or more.",
    },
    FieldRule {
        field: "title",
        groups: &[GROUP_DEFAULT, "title"],
        check: RuleCheck::NotNull,
        message: "Product title must not be null.",
    },
    FieldRule {
        field: "price",
        groups: &[GROUP_DEFAULT, "price"],
        check: RuleCheck::TypeFloat,
        message: "Product price must be of float type.",
    },
    FieldRule {
        field: "price",
        groups: &[GROUP_DEFAULT, "price"],
        check: RuleCheck::Range {
            min: 0.0,
            max: 200.0,
        },
        message: "Product price must be between 0 and 200.",
    },
    FieldRule {
        field: "price",
        groups: &[GROUP_DEFAULT, "price"],
        check: RuleCheck::NotNull,
        message: "Product price must not be null.",
    },
    FieldRule {
        field: "eId",
        groups: &[GROUP_DEFAULT, "eId"],
        check: RuleCheck::TypeInt,
        message: "Product eId must be of int type.",
    },
];

const CATEGORY_RULES: &[FieldRule] = &[
    FieldRule {
        field: "id",
        groups: &["id"],
        check: RuleCheck::TypeInt,
        message: "Category id must be of int type.",
    },
    FieldRule {
        field: "id",
        groups: &["id"],
        check: RuleCheck::NotNull,
        message: "Category id must not be null.",
    },
    FieldRule {
        field: "title",
        groups: &[GROUP_DEFAULT, "title"],
        check: RuleCheck::TypeString,
        message: "Category title must be of string type.",
    },
    FieldRule {
        field: "title",
        groups: &[GROUP_DEFAULT, "title"],
        check: RuleCheck::MaxLength(12),
        message: "Category title must have 12 characters or less.",
    },
    FieldRule {
        field: "title",
        groups: &[GROUP_DEFAULT, "title"],
        check: RuleCheck::MinLength(3),
        message: "Category title must have 3 characters or more.",
    },
    FieldRule {
        field: "title",
        groups: &[GROUP_DEFAULT, "title"],
        check: RuleCheck::NotNull,
        message: "Category title must not be null.",
    },
    FieldRule {
        field: "eId",
        groups: &[GROUP_DEFAULT, "eId"],
        check: RuleCheck::TypeInt,
        message: "Category eId must be of int type.",
    },
];

/// The rule table for an entity type, in evaluation order.
pub fn rules_for(entity_type: EntityType) -> &'static [FieldRule] {
    match entity_type {
        EntityType::Product => PRODUCT_RULES,
        EntityType::Category => CATEGORY_RULES,
    }
}
