//! Compact relation-member shape.

use catalog_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// How a related entity appears inside another entity's payload: enough
/// to identify it without recursing into its own relations.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySummary {
    pub id: DbId,
    pub title: String,
    pub e_id: Option<DbId>,
}
