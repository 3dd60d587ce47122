//! Category row model and response shapes.

use catalog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::summary::EntitySummary;

/// A category row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    pub id: DbId,
    pub title: String,
    pub e_id: Option<DbId>,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

/// A category with its linked products, as returned by read endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: CategoryRow,
    pub products: Vec<EntitySummary>,
}

impl From<CategoryRow> for catalog_core::entity::Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: Some(row.id),
            title: Some(row.title),
            e_id: row.e_id,
            products: Vec::new(),
        }
    }
}
