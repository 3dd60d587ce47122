//! Request-envelope gates.
//!
//! Write endpoints take the raw body and apply these gates before the
//! spec pipeline sees anything: the body must be JSON, and the envelope
//! must carry the expected key. Violations surface as a 400 with the
//! same `errors` list shape the pipeline uses.

use serde_json::Value;

use catalog_core::spec::{SpecViolation, ENTITY_DATA_KEY};
use catalog_core::types::SpecMap;

use crate::error::AppError;

/// Envelope key carrying the items of a batch request.
pub const ENTITIES_SPECS_KEY: &str = "entitiesSpecs";

/// Parse the raw request body as JSON.
pub fn parse_json(body: &str) -> Result<Value, AppError> {
    serde_json::from_str(body)
        .map_err(|_| AppError::rejection("Request body must be of JSON type."))
}

/// The parsed body as an object envelope carrying `entityData`.
/// Anything else cannot describe an entity.
pub fn require_envelope(body: Value) -> Result<SpecMap, AppError> {
    match body {
        Value::Object(map) if map.contains_key(ENTITY_DATA_KEY) => Ok(map),
        _ => Err(AppError::rejection(SpecViolation::MissingEntityData)),
    }
}

/// Pull the `entityData` object out of an envelope.
pub fn take_entity_data(envelope: &mut SpecMap) -> Result<SpecMap, AppError> {
    match envelope.remove(ENTITY_DATA_KEY) {
        Some(Value::Object(entity_data)) => Ok(entity_data),
        _ => Err(AppError::rejection(SpecViolation::MissingEntityData)),
    }
}

/// Pull the `entitiesSpecs` array out of a batch request body.
pub fn take_entities_specs(body: Value) -> Result<Vec<Value>, AppError> {
    let Value::Object(mut envelope) = body else {
        return Err(malformed_batch());
    };
    match envelope.remove(ENTITIES_SPECS_KEY) {
        Some(Value::Array(specs)) => Ok(specs),
        _ => Err(malformed_batch()),
    }
}

fn malformed_batch() -> AppError {
    AppError::rejection("\"entitiesSpecs\" field must be set and be an array.")
}
