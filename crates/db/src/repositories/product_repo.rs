//! Repository for the `products` table.

use catalog_core::entity::Product;
use catalog_core::types::{DbId, SpecMap};
use sqlx::PgPool;

use super::field_query::{self, ColumnKind, ColumnSpec};
use crate::models::product::ProductRow;
use crate::models::summary::EntitySummary;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, price, e_id, created_at, updated_at";

/// Wire fields a product can be located by.
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
    ColumnSpec {
        field: "price",
        column: "price",
        kind: ColumnKind::Float,
    },
];

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a product and link its categories. One transaction.
    pub async fn create(pool: &PgPool, product: &Product) -> Result<ProductRow, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO products (title, price, e_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(product.title.as_deref())
            .bind(product.price)
            .bind(product.e_id)
            .fetch_one(&mut *tx)
            .await?;
        Self::link_categories(&mut tx, row.id, &product.categories).await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Find a product by its internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProductRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProductRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, ProductRow>(&query).fetch_all(pool).await
    }

    /// Find one product by an exact field-value combination.
    pub async fn find_by_fields(
        pool: &PgPool,
        fields: &SpecMap,
    ) -> Result<Option<ProductRow>, sqlx::Error> {
        let Some((clause, binds)) = field_query::where_clause(FIELD_COLUMNS, fields) else {
            return Ok(None);
        };
        let sql = format!("SELECT {COLUMNS} FROM products WHERE {clause} LIMIT 1");
        field_query::bind_values(sqlx::query_as::<_, ProductRow>(&sql), binds)
            .fetch_optional(pool)
            .await
    }

    /// Apply the merged entity state to the row. One transaction; newly
    /// resolved category links are appended, existing links stay.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        product: &Product,
    ) -> Result<Option<ProductRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE products SET
                title = $2,
                price = $3,
                e_id = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .bind(product.title.as_deref())
            .bind(product.price)
            .bind(product.e_id)
            .fetch_optional(&mut *tx)
            .await?;
        if let Some(row) = &row {
            Self::link_categories(&mut tx, row.id, &product.categories).await?;
        }
        tx.commit().await?;
        Ok(row)
    }

    /// Delete a product by id. Join rows cascade. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Categories linked to a product, as relation summaries.
    pub async fn categories_of(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<EntitySummary>, sqlx::Error> {
        sqlx::query_as::<_, EntitySummary>(
            "SELECT c.id, c.title, c.e_id FROM categories c
             JOIN product_categories pc ON pc.category_id = c.id
             WHERE pc.product_id = $1
             ORDER BY c.id",
        )
        .bind(product_id)
        .fetch_all(pool)
        .await
    }

    /// Link categories to a product. Re-linking an existing pair is a
    /// no-op.
    async fn link_categories(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        product_id: DbId,
        category_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        for category_id in category_ids {
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
