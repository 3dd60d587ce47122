//! Table-driven entity validation.
//!
//! Provides static per-entity rule tables and a pure-logic evaluator --
//! no database dependencies.

pub mod evaluator;
pub mod rules;

pub use evaluator::{validate_field, validation_error_messages};
pub use rules::{FieldRule, RuleCheck, GROUP_DEFAULT};
