//! Repository for the `categories` table.

use catalog_core::entity::Category;
use catalog_core::types::{DbId, SpecMap};
use sqlx::PgPool;

use super::field_query::{self, ColumnKind, ColumnSpec};
use crate::models::category::CategoryRow;
use crate::models::summary::EntitySummary;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, e_id, created_at, updated_at";

/// Wire fields a category can be located by.
const FIELD_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        field: "id",
        column: "id",
        kind: ColumnKind::Int,
    },
    ColumnSpec {
        field: "eId",
        column: "e_id",
        kind: ColumnKind::Int,
    },
    ColumnSpec {
        field: "title",
        column: "title",
        kind: ColumnKind::Text,
    },
];

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a category and link its products. One transaction.
    pub async fn create(pool: &PgPool, category: &Category) -> Result<CategoryRow, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO categories (title, e_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CategoryRow>(&query)
            .bind(category.title.as_deref())
            .bind(category.e_id)
            .fetch_one(&mut *tx)
            .await?;
        Self::link_products(&mut tx, row.id, &category.products).await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Find a category by its internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, CategoryRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find one category by an exact field-value combination.
    pub async fn find_by_fields(
        pool: &PgPool,
        fields: &SpecMap,
    ) -> Result<Option<CategoryRow>, sqlx::Error> {
        let Some((clause, binds)) = field_query::where_clause(FIELD_COLUMNS, fields) else {
            return Ok(None);
        };
        let sql = format!("SELECT {COLUMNS} FROM categories WHERE {clause} LIMIT 1");
        field_query::bind_values(sqlx::query_as::<_, CategoryRow>(&sql), binds)
            .fetch_optional(pool)
            .await
    }

    /// Apply the merged entity state to the row. One transaction; newly
    /// resolved product links are appended, existing links stay.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        category: &Category,
    ) -> Result<Option<CategoryRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE categories SET
                title = $2,
                e_id = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .bind(category.title.as_deref())
            .bind(category.e_id)
            .fetch_optional(&mut *tx)
            .await?;
        if let Some(row) = &row {
            Self::link_products(&mut tx, row.id, &category.products).await?;
        }
        tx.commit().await?;
        Ok(row)
    }

    /// Delete a category by id. Join rows cascade. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Products linked to a category, as relation summaries.
    pub async fn products_of(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<EntitySummary>, sqlx::Error> {
        sqlx::query_as::<_, EntitySummary>(
            "SELECT p.id, p.title, p.e_id FROM products p
             JOIN product_categories pc ON pc.product_id = p.id
             WHERE pc.category_id = $1
             ORDER BY p.id",
        )
        .bind(category_id)
        .fetch_all(pool)
        .await
    }

    /// Link products to a category. Re-linking an existing pair is a
    /// no-op.
    async fn link_products(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        category_id: DbId,
        product_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        for product_id in product_ids {
            sqlx::query(
                "INSERT INTO product_categories (product_id, category_id)
                 VALUES ($1, $2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(product_id)
            .bind(category_id)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}
