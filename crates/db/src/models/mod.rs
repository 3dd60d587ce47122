//! Row models and response shapes.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` row struct matching the database row
//!   (wire names are camelCase, so `e_id` serializes as `eId`)
//! - A detail shape carrying the entity's relation members

pub mod category;
pub mod product;
pub mod summary;

pub use category::{CategoryDetail, CategoryRow};
pub use product::{ProductDetail, ProductRow};
pub use summary::EntitySummary;
