//! One-shot schema bootstrapper.
//!
//! Applies the embedded DDL/seed script. The script guards every statement
//! (create-if-absent tables, conflict-skip inserts), so running it against an
//! already-bootstrapped database is a no-op rather than an error.
//!
//! Administrative only: this runs to completion before the server starts
//! accepting traffic, never on the request path.

use crate::{Db, DbError};

/// The fixed DDL + seed script for the demo e-commerce schema.
pub const INIT_SCRIPT: &str = include_str!("../../../sql/init_database.sql");

/// Apply the schema and seed data. Safe to call repeatedly.
pub async fn bootstrap(db: &Db) -> Result<(), DbError> {
    sqlx::raw_sql(INIT_SCRIPT)
        .execute(db.pool())
        .await
        .map_err(DbError::Query)?;

    tracing::info!("database schema bootstrapped");
    Ok(())
}
