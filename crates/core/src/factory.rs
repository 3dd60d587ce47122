//! Entity materialization from processed specs.

use serde_json::Value;

use crate::entity::{CatalogEntity, Category, EntityType, Product};
use crate::types::SpecMap;

/// Map a flat field spec onto a typed entity instance.
///
/// With no `existing` instance a zero-valued entity is constructed;
/// otherwise the supplied instance is mutated in place. Recognized spec
/// keys are applied through the type's setters; keys absent from the
/// spec leave the current value untouched. An explicit JSON `null`
/// clears the nullable `eId` field. Resolved relation ids found under
/// the relation-collection key are appended; re-appending an
/// already-linked id is a no-op.
///
/// # Panics
///
/// Panics when `existing` holds an entity of a different type than
/// `entity_type`. That is a programming-contract violation by the
/// caller, not a request-time condition.
pub fn create_entity(
    entity_type: EntityType,
    spec: &SpecMap,
    existing: Option<CatalogEntity>,
) -> CatalogEntity {
    match entity_type {
        EntityType::Product => {
            let mut product = match existing {
                None => Product::default(),
                Some(CatalogEntity::Product(product)) => product,
                Some(other) => mismatch(entity_type, &other),
            };
            apply_product_fields(&mut product, spec);
            CatalogEntity::Product(product)
        }
        EntityType::Category => {
            let mut category = match existing {
                None => Category::default(),
                Some(CatalogEntity::Category(category)) => category,
                Some(other) => mismatch(entity_type, &other),
            };
            apply_category_fields(&mut category, spec);
            CatalogEntity::Category(category)
        }
    }
}

fn mismatch(expected: EntityType, got: &CatalogEntity) -> ! {
    panic!(
        "entity factory called for {} with an existing {} instance",
        expected.name(),
        got.entity_type().name()
    );
}

fn apply_product_fields(product: &mut Product, spec: &SpecMap) {
    if let Some(id) = spec.get("id").and_then(Value::as_i64) {
        product.id = Some(id);
    }
    if let Some(title) = spec.get("title").and_then(Value::as_str) {
        product.title = Some(title.to_string());
    }
    if let Some(price) = spec.get("price").and_then(Value::as_f64) {
        product.price = Some(price);
    }
    match spec.get("eId") {
        Some(Value::Null) => product.e_id = None,
        Some(value) => {
            if let Some(e_id) = value.as_i64() {
                product.e_id = Some(e_id);
            }
        }
        None => {}
    }
    if let Some(Value::Array(ids)) = spec.get("categories") {
        for category_id in ids.iter().filter_map(Value::as_i64) {
            product.add_category(category_id);
        }
    }
}

fn apply_category_fields(category: &mut Category, spec: &SpecMap) {
    if let Some(id) = spec.get("id").and_then(Value::as_i64) {
        category.id = Some(id);
    }
    if let Some(title) = spec.get("title").and_then(Value::as_str) {
        category.title = Some(title.to_string());
    }
    match spec.get("eId") {
        Some(Value::Null) => category.e_id = None,
        Some(value) => {
            if let Some(e_id) = value.as_i64() {
                category.e_id = Some(e_id);
            }
        }
        None => {}
    }
    if let Some(Value::Array(ids)) = spec.get("products") {
        for product_id in ids.iter().filter_map(Value::as_i64) {
            category.add_product(product_id);
        }
    }
}
