//! Error types for the MCP crate.

use thiserror::Error;

/// Tool-level errors: the taxonomy reported back to callers.
///
/// Transports translate these into their wire representation (JSON-RPC error
/// codes, HTTP status codes). Nothing else ever crosses the tool boundary.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Malformed tool arguments. Never retried.
    #[error("invalid arguments: {0}")]
    Validation(String),

    /// Unknown table or tool.
    #[error("not found: {0}")]
    NotFound(String),

    /// Operation disallowed under the read-only policy.
    #[error("not permitted: {0}")]
    Permission(String),

    /// Underlying query failure, sanitized. `detail` carries the driver
    /// error text and is attached to responses only in debug mode.
    #[error("{message}")]
    Execution {
        message: String,
        detail: Option<String>,
    },
}

impl ToolError {
    /// Taxonomy label carried in the JSON-RPC error `data`.
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::Validation(_) => "validation",
            ToolError::NotFound(_) => "not_found",
            ToolError::Permission(_) => "permission",
            ToolError::Execution { .. } => "execution",
        }
    }

    /// JSON-RPC error code.
    pub fn code(&self) -> i32 {
        match self {
            ToolError::Validation(_) => -32602,
            ToolError::NotFound(_) => -32001,
            ToolError::Permission(_) => -32002,
            ToolError::Execution { .. } => -32000,
        }
    }

    /// An execution error with no debug detail.
    pub fn execution(message: impl Into<String>) -> Self {
        ToolError::Execution {
            message: message.into(),
            detail: None,
        }
    }
}

/// Server-level errors: failures of the process itself rather than of a
/// single invocation.
#[derive(Debug, Error)]
pub enum McpError {
    /// Failed to start a transport.
    #[error("failed to start MCP server: {0}")]
    StartupFailed(String),

    /// IO error on the stdio transport.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error on the stdio transport.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
