//! SQL statement classification for the read-only policy.
//!
//! `run_query` accepts arbitrary SQL text, so the read-only policy cannot
//! rely on keyword scanning: statements are parsed with the Postgres dialect
//! and classified by their AST shape. SQL that does not parse is rejected
//! before it reaches the database.

use crate::error::ToolError;
use sqlparser::ast::Statement;
use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::parser::Parser;

/// The operation class of a SQL statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlOperation {
    Select,
    Insert,
    Update,
    Delete,
    Ddl,
    Other,
}

impl SqlOperation {
    /// Whether the operation is allowed under the read-only policy.
    pub fn is_read_only(&self) -> bool {
        matches!(self, SqlOperation::Select)
    }

    /// Whether the operation produces a result set (as opposed to an
    /// affected-row count).
    pub fn returns_rows(&self) -> bool {
        matches!(self, SqlOperation::Select)
    }
}

impl std::fmt::Display for SqlOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SqlOperation::Select => "SELECT",
            SqlOperation::Insert => "INSERT",
            SqlOperation::Update => "UPDATE",
            SqlOperation::Delete => "DELETE",
            SqlOperation::Ddl => "DDL",
            SqlOperation::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// Parse SQL text and classify each contained statement.
///
/// Fails with [`ToolError::Validation`] for unparseable or empty input.
pub fn classify(sql: &str) -> Result<Vec<SqlOperation>, ToolError> {
    let statements = Parser::parse_sql(&PostgreSqlDialect {}, sql)
        .map_err(|e| ToolError::Validation(format!("failed to parse SQL: {e}")))?;

    if statements.is_empty() {
        return Err(ToolError::Validation("empty SQL statement".to_string()));
    }

    Ok(statements.iter().map(classify_statement).collect())
}

fn classify_statement(statement: &Statement) -> SqlOperation {
    match statement {
        Statement::Query(_) => SqlOperation::Select,
        Statement::Insert { .. } => SqlOperation::Insert,
        Statement::Update { .. } => SqlOperation::Update,
        Statement::Delete { .. } => SqlOperation::Delete,
        Statement::CreateTable { .. }
        | Statement::AlterTable { .. }
        | Statement::Drop { .. }
        | Statement::Truncate { .. }
        | Statement::CreateIndex { .. }
        | Statement::CreateView { .. } => SqlOperation::Ddl,
        _ => SqlOperation::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_is_read_only() {
        let ops = classify("SELECT id, name FROM products WHERE price > $1").unwrap();
        assert_eq!(ops, vec![SqlOperation::Select]);
        assert!(ops[0].is_read_only());
    }

    #[test]
    fn cte_is_read_only() {
        let ops = classify("WITH t AS (SELECT 1 AS n) SELECT n FROM t").unwrap();
        assert_eq!(ops, vec![SqlOperation::Select]);
    }

    #[test]
    fn mutations_are_classified() {
        assert_eq!(
            classify("INSERT INTO users (username) VALUES ($1)").unwrap(),
            vec![SqlOperation::Insert]
        );
        assert_eq!(
            classify("UPDATE products SET price = $1 WHERE id = $2").unwrap(),
            vec![SqlOperation::Update]
        );
        assert_eq!(
            classify("DELETE FROM orders WHERE id = $1").unwrap(),
            vec![SqlOperation::Delete]
        );
        assert_eq!(
            classify("DROP TABLE users").unwrap(),
            vec![SqlOperation::Ddl]
        );
    }

    #[test]
    fn multi_statement_input_classifies_each() {
        let ops = classify("SELECT 1; DELETE FROM orders").unwrap();
        assert_eq!(ops, vec![SqlOperation::Select, SqlOperation::Delete]);
        assert!(!ops.iter().all(SqlOperation::is_read_only));
    }

    #[test]
    fn garbage_is_rejected_as_validation() {
        let err = classify("SELEKT * FORM users").unwrap_err();
        assert!(matches!(err, ToolError::Validation(_)));

        let err = classify("   ").unwrap_err();
        assert!(matches!(err, ToolError::Validation(_)));
    }
}
