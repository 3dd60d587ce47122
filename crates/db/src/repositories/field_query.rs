//! Exact field-combination lookups.
//!
//! Update identifying data and relation references locate entities by an
//! arbitrary whitelisted field combination. This module maps wire field
//! names onto columns and typed bind values so repositories can build
//! the matching `WHERE` clause. A field outside the whitelist, or a
//! value whose JSON shape does not fit the column, cannot match any row
//! and short-circuits to "not found" instead of reaching the database.

use catalog_core::types::SpecMap;
use serde_json::Value;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

/// Column value shape.
#[derive(Debug, Clone, Copy)]
pub enum ColumnKind {
    Int,
    Float,
    Text,
}

/// A queryable column: the wire field name clients use and the column it
/// maps to.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub field: &'static str,
    pub column: &'static str,
    pub kind: ColumnKind,
}

/// A value ready to bind.
#[derive(Debug, Clone)]
pub enum BindValue {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Build `column = $n AND ...` plus its bind values for an exact
/// field-combination match. `None` when some field cannot match any row.
pub fn where_clause(columns: &[ColumnSpec], fields: &SpecMap) -> Option<(String, Vec<BindValue>)> {
    let mut clauses = Vec::with_capacity(fields.len());
    let mut binds = Vec::with_capacity(fields.len());

    for (field, value) in fields {
        let spec = columns.iter().find(|column| column.field == field)?;
        let bind = match spec.kind {
            ColumnKind::Int => BindValue::Int(value.as_i64()?),
            ColumnKind::Float => BindValue::Float(value.as_f64()?),
            ColumnKind::Text => BindValue::Text(value.as_str()?.to_string()),
        };
        clauses.push(format!("{} = ${}", spec.column, binds.len() + 1));
        binds.push(bind);
    }

    if clauses.is_empty() {
        return None;
    }
    Some((clauses.join(" AND "), binds))
}

/// Bind the collected values onto a query, in clause order.
pub fn bind_values<T>(
    mut query: QueryAs<'_, Postgres, T, PgArguments>,
    binds: Vec<BindValue>,
) -> QueryAs<'_, Postgres, T, PgArguments> {
    for bind in binds {
        query = match bind {
            BindValue::Int(value) => query.bind(value),
            BindValue::Float(value) => query.bind(value),
            BindValue::Text(value) => query.bind(value),
        };
    }
    query
}
