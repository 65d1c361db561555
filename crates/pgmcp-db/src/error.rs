//! Database errors.

use thiserror::Error;

/// Errors surfaced by the database connector.
///
/// Connect and query failures are kept distinct: a connect failure is fatal
/// at startup, while a query failure during serving is reported back to the
/// caller of the current invocation only.
#[derive(Debug, Error)]
pub enum DbError {
    /// The endpoint was unreachable, authentication was rejected, or the
    /// named database does not exist. The source error carries the
    /// driver-level distinction.
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    /// A statement failed to execute.
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// A bind parameter had a type the connector cannot map to SQL.
    #[error("unsupported parameter type: {0}")]
    UnsupportedParam(String),
}
