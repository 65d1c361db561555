//! Schema introspection queries.
//!
//! Exposes the parts of the catalog the MCP tools report verbatim: base
//! table names and per-table column definitions. System schemas are never
//! included.

use crate::error::DbError;
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};

/// A column as reported by `get_table_schema`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
}

/// List base tables in the public schema.
///
/// Ordered by creation (pg_class oid), so the seed schema reports
/// `users, products, orders`.
pub async fn list_tables(pool: &PgPool) -> Result<Vec<String>, DbError> {
    let rows = sqlx::query(
        r#"
        select c.relname as table_name
        from pg_catalog.pg_class c
        join pg_catalog.pg_namespace n on n.oid = c.relnamespace
        where c.relkind = 'r'
          and n.nspname = 'public'
        order by c.oid
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(DbError::Query)?;

    Ok(rows
        .into_iter()
        .map(|row| row.get::<String, _>("table_name"))
        .collect())
}

/// Column definitions for a table in the public schema, in ordinal order.
///
/// An unknown table yields an empty list; the caller decides how to report
/// that.
pub async fn table_schema(pool: &PgPool, table: &str) -> Result<Vec<ColumnInfo>, DbError> {
    let rows = sqlx::query(
        r#"
        select column_name, data_type, is_nullable
        from information_schema.columns
        where table_schema = 'public' and table_name = $1
        order by ordinal_position
        "#,
    )
    .bind(table)
    .fetch_all(pool)
    .await
    .map_err(DbError::Query)?;

    Ok(rows
        .into_iter()
        .map(|row| ColumnInfo {
            name: row.get("column_name"),
            data_type: row.get("data_type"),
            nullable: row.get::<String, _>("is_nullable") == "YES",
        })
        .collect())
}
