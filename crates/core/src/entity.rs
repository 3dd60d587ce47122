//! Catalog entity types.
//!
//! [`Product`] and [`Category`] here are transient instances: the form
//! the entity factory materializes from a processed spec before the
//! persistence layer writes them out. Scalar fields are optional because
//! specs are partial; relation members are already-resolved ids.

use crate::types::DbId;

/// The closed set of entity types the catalog manages.
///
/// Spec processing, validation, and persistence all dispatch on this
/// registry; there is no runtime type-name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Product,
    Category,
}

impl EntityType {
    /// Capitalized name, used when naming the entity in lookups.
    pub fn name(self) -> &'static str {
        match self {
            EntityType::Product => "Product",
            EntityType::Category => "Category",
        }
    }

    /// Lowercase name, used in user-facing messages.
    pub fn lowercase_name(self) -> &'static str {
        match self {
            EntityType::Product => "product",
            EntityType::Category => "category",
        }
    }
}

/// A transient product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub e_id: Option<DbId>,
    /// Ids of linked categories.
    pub categories: Vec<DbId>,
}

impl Product {
    /// Append a category relation member. Re-appending an id that is
    /// already linked is a no-op.
    pub fn add_category(&mut self, category_id: DbId) {
        if !self.categories.contains(&category_id) {
            self.categories.push(category_id);
        }
    }
}

/// A transient category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Category {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub e_id: Option<DbId>,
    /// Ids of linked products (inverse side of the relation).
    pub products: Vec<DbId>,
}

impl Category {
    /// Append a product relation member. Re-appending an id that is
    /// already linked is a no-op.
    pub fn add_product(&mut self, product_id: DbId) {
        if !self.products.contains(&product_id) {
            self.products.push(product_id);
        }
    }
}

/// A transient entity of either catalog type.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEntity {
    Product(Product),
    Category(Category),
}

impl CatalogEntity {
    pub fn entity_type(&self) -> EntityType {
        match self {
            CatalogEntity::Product(_) => EntityType::Product,
            CatalogEntity::Category(_) => EntityType::Category,
        }
    }
}
