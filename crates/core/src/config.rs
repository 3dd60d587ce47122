//! Per-entity-type configuration of the spec pipeline.
//!
//! One immutable value per entity type, passed explicitly to the
//! processor. Field names are the wire names clients send.

use crate::entity::EntityType;

/// A relation-reference field: a spec key carrying external identifiers
/// of related entities, resolved to concrete ids before persistence.
#[derive(Debug, Clone, Copy)]
pub struct RelationFieldConfig {
    /// Spec key holding the external identifiers (e.g. `categoriesEIds`).
    pub spec_field: &'static str,
    /// Key the resolved ids are stored under in the processed spec.
    pub resolved_field: &'static str,
    /// Entity type the references point at.
    pub target: EntityType,
    /// Field of the target the references are matched against.
    pub reference_field: &'static str,
}

/// Immutable spec-pipeline configuration for one entity type.
#[derive(Debug, Clone, Copy)]
pub struct EntityTypeConfig {
    pub entity_type: EntityType,
    /// Fields a creation payload may carry; anything else is rejected.
    pub allowed_creation_fields: &'static [&'static str],
    /// Identifying field used when an update names none.
    pub default_identifying_field: &'static str,
    /// Field combinations allowed to identify an entity for update.
    /// Compared as sets, not sequences.
    pub allowed_identifying_field_sets: &'static [&'static [&'static str]],
    /// Fields validated one-by-one on partial updates.
    pub incremental_validation_fields: &'static [&'static str],
    pub relation_field: Option<RelationFieldConfig>,
}

const PRODUCT_CONFIG: EntityTypeConfig = EntityTypeConfig {
    entity_type: EntityType::Product,
    allowed_creation_fields: &["title", "price", "eId", "categoriesEIds"],
    default_identifying_field: "id",
    allowed_identifying_field_sets: &[&["id"], &["eId"]],
    incremental_validation_fields: &["id", "title", "price", "eId"],
    relation_field: Some(RelationFieldConfig {
        spec_field: "categoriesEIds",
        resolved_field: "categories",
        target: EntityType::Category,
        reference_field: "eId",
    }),
};

const CATEGORY_CONFIG: EntityTypeConfig = EntityTypeConfig {
    entity_type: EntityType::Category,
    allowed_creation_fields: &["title", "eId", "productsEIds"],
    default_identifying_field: "id",
    allowed_identifying_field_sets: &[&["id"], &["eId"]],
    incremental_validation_fields: &["id", "title", "eId"],
    relation_field: Some(RelationFieldConfig {
        spec_field: "productsEIds",
        resolved_field: "products",
        target: EntityType::Product,
        reference_field: "eId",
    }),
};

impl EntityTypeConfig {
    /// Configuration for the given entity type. The registry is closed,
    /// so the lookup is total.
    pub fn of(entity_type: EntityType) -> &'static EntityTypeConfig {
        match entity_type {
            EntityType::Product => &PRODUCT_CONFIG,
            EntityType::Category => &CATEGORY_CONFIG,
        }
    }
}
