//! Product row model and response shapes.

use catalog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::summary::EntitySummary;

/// A product row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: DbId,
    pub title: String,
    pub price: f64,
    pub e_id: Option<DbId>,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

/// A product with its linked categories, as returned by read endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: ProductRow,
    pub categories: Vec<EntitySummary>,
}

impl From<ProductRow> for catalog_core::entity::Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: Some(row.id),
            title: Some(row.title),
            price: Some(row.price),
            e_id: row.e_id,
            categories: Vec::new(),
        }
    }
}
