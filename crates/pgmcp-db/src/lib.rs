//! # pgmcp-db
//!
//! Postgres connector for the pgmcp starter kit.
//!
//! The [`Db`] handle wraps a sqlx connection pool and exposes the small
//! surface the tool dispatcher needs: parameterized fetch/execute, schema
//! introspection, and the one-shot bootstrapper. Caller-supplied values only
//! ever travel through bind parameters; SQL text is never assembled from
//! them.
//!
//! The pool is safe for concurrent use: each in-flight call draws its own
//! connection, so no additional locking exists anywhere in this crate.

pub mod bootstrap;
pub mod error;
pub mod introspect;

pub use bootstrap::bootstrap;
pub use error::DbError;
pub use introspect::ColumnInfo;

use bigdecimal::ToPrimitive;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use pgmcp_core::DbConfig;
use serde_json::{Value, json};
use sqlx::postgres::{PgArguments, PgPoolOptions, PgRow};
use sqlx::query::Query;
use sqlx::types::BigDecimal;
use sqlx::{Column, PgPool, Postgres, Row};
use std::time::Duration;

/// Rows returned by a fetch, together with the column order of the result
/// set. `columns` is empty when the statement produced no rows.
#[derive(Debug, Clone)]
pub struct QueryRows {
    pub columns: Vec<String>,
    pub rows: Vec<Value>,
}

/// A live database handle backed by a connection pool.
#[derive(Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    /// Connect to the database described by `config`.
    ///
    /// A single attempt, no retries: the error is surfaced to the caller.
    pub async fn connect(config: &DbConfig) -> Result<Self, DbError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(10))
            .connect(&config.connection_string())
            .await
            .map_err(DbError::Connect)?;

        tracing::debug!(
            host = %config.host,
            database = %config.database,
            "connected to upstream database"
        );

        Ok(Self { pool })
    }

    /// Wrap an already-established pool (test harnesses).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run a row-returning statement with bind parameters.
    pub async fn fetch(&self, sql: &str, params: &[Value]) -> Result<QueryRows, DbError> {
        let query = bind_params(sqlx::query(sql), params)?;
        let rows = query.fetch_all(&self.pool).await.map_err(DbError::Query)?;

        let columns = rows
            .first()
            .map(|row| {
                row.columns()
                    .iter()
                    .map(|c| c.name().to_string())
                    .collect()
            })
            .unwrap_or_default();

        let rows = rows.iter().map(row_to_json).collect();
        Ok(QueryRows { columns, rows })
    }

    /// Run a non-returning statement with bind parameters, yielding the
    /// affected-row count.
    pub async fn execute(&self, sql: &str, params: &[Value]) -> Result<u64, DbError> {
        let query = bind_params(sqlx::query(sql), params)?;
        let result = query.execute(&self.pool).await.map_err(DbError::Query)?;
        Ok(result.rows_affected())
    }

    /// Base tables in the public schema, in creation order.
    pub async fn list_tables(&self) -> Result<Vec<String>, DbError> {
        introspect::list_tables(&self.pool).await
    }

    /// Column definitions for a table, in ordinal order. Empty when the
    /// table is unknown.
    pub async fn table_schema(&self, table: &str) -> Result<Vec<ColumnInfo>, DbError> {
        introspect::table_schema(&self.pool, table).await
    }

    /// Server version string.
    pub async fn version(&self) -> Result<String, DbError> {
        sqlx::query_scalar("select version()")
            .fetch_one(&self.pool)
            .await
            .map_err(DbError::Query)
    }

    /// Name of the connected database.
    pub async fn current_database(&self) -> Result<String, DbError> {
        sqlx::query_scalar("select current_database()")
            .fetch_one(&self.pool)
            .await
            .map_err(DbError::Query)
    }
}

/// Bind JSON scalar values onto a query.
///
/// string → text, integer → int8, float → float8, bool → bool, null → NULL.
/// Arrays and objects are rejected.
fn bind_params<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &'q [Value],
) -> Result<Query<'q, Postgres, PgArguments>, DbError> {
    for param in params {
        query = match param {
            Value::Null => query.bind(None::<String>),
            Value::Bool(b) => query.bind(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    query.bind(i)
                } else if let Some(f) = n.as_f64() {
                    query.bind(f)
                } else {
                    return Err(DbError::UnsupportedParam(n.to_string()));
                }
            }
            Value::String(s) => query.bind(s.as_str()),
            Value::Array(_) => {
                return Err(DbError::UnsupportedParam("array".to_string()));
            }
            Value::Object(_) => {
                return Err(DbError::UnsupportedParam("object".to_string()));
            }
        };
    }
    Ok(query)
}

/// Shape a Postgres row into a JSON object.
///
/// Column values are decoded through a chain of typed attempts; anything
/// that decodes as none of them (including SQL NULL) becomes JSON null.
fn row_to_json(row: &PgRow) -> Value {
    let mut obj = serde_json::Map::new();

    for col in row.columns() {
        let name = col.name();

        let value: Value = if let Ok(v) = row.try_get::<i64, _>(name) {
            json!(v)
        } else if let Ok(v) = row.try_get::<i32, _>(name) {
            json!(v)
        } else if let Ok(v) = row.try_get::<i16, _>(name) {
            json!(v)
        } else if let Ok(v) = row.try_get::<f64, _>(name) {
            json!(v)
        } else if let Ok(v) = row.try_get::<f32, _>(name) {
            json!(v)
        } else if let Ok(v) = row.try_get::<bool, _>(name) {
            json!(v)
        } else if let Ok(v) = row.try_get::<BigDecimal, _>(name) {
            // NUMERIC columns (currency). Values outside f64 range fall
            // back to their text form.
            match v.to_f64() {
                Some(f) => json!(f),
                None => json!(v.to_string()),
            }
        } else if let Ok(v) = row.try_get::<String, _>(name) {
            json!(v)
        } else if let Ok(v) = row.try_get::<DateTime<Utc>, _>(name) {
            json!(v.to_rfc3339())
        } else if let Ok(v) = row.try_get::<NaiveDateTime, _>(name) {
            json!(v.to_string())
        } else if let Ok(v) = row.try_get::<NaiveDate, _>(name) {
            json!(v.to_string())
        } else if let Ok(v) = row.try_get::<Value, _>(name) {
            v
        } else {
            Value::Null
        };

        obj.insert(name.to_string(), value);
    }

    Value::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_params_bind() {
        let params = vec![json!("text"), json!(42), json!(1.5), json!(true), Value::Null];
        assert!(bind_params(sqlx::query("select $1, $2, $3, $4, $5"), &params).is_ok());
    }

    #[test]
    fn composite_params_are_rejected() {
        let arrays = vec![json!([1, 2])];
        let err = bind_params(sqlx::query("select $1"), &arrays).err().unwrap();
        assert!(matches!(err, DbError::UnsupportedParam(_)));

        let objects = vec![json!({"k": "v"})];
        let err = bind_params(sqlx::query("select $1"), &objects).err().unwrap();
        assert!(matches!(err, DbError::UnsupportedParam(_)));
    }
}
