//! The spec processing pipeline.
//!
//! Turns an arbitrary nested key-value payload into either a validated,
//! normalized creation/update instruction or a structured list of
//! rejection reasons.

pub mod error;
pub mod processor;

pub use error::{SpecError, SpecItemError, SpecViolation};
pub use processor::{
    EntityLookup, ProcessedCreateSpec, ProcessedSpec, ProcessedUpdateSpec, SpecMode,
    SpecProcessor, ENTITY_DATA_KEY, IDENTIFY_BY_KEY,
};
