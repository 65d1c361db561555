//! # pgmcp-mcp
//!
//! MCP (Model Context Protocol) server for a Postgres database.
//!
//! This crate is the dispatch core of the starter kit: it exposes a fixed set
//! of named tools over two transports and forwards them to the database
//! connector as parameterized SQL.
//!
//! ## Architecture
//!
//! ```text
//! AI client (Claude Desktop, HTTP caller, ...)
//!       │
//!       │ JSON-RPC (initialize / tools/list / tools/call)
//!       ▼
//! ┌──────────────────┐
//! │  McpServer       │
//! │  1. decode       │  ← stdio line protocol, or axum POST /mcp
//! │  2. dispatch     │  ← ToolRegistry (fixed, resolved at startup)
//! │  3. validate     │  ← per-tool argument checks
//! │  4. execute      │  ← pgmcp-db (bind parameters only)
//! │  5. shape result │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    Upstream Postgres
//! ```
//!
//! ## Tools
//!
//! | Tool | Description |
//! |------|-------------|
//! | `list_tables` | Base tables in the public schema |
//! | `get_table_schema` | Column name/type/nullability for one table |
//! | `get_table_data` | Bounded page of rows from one table |
//! | `run_query` | Arbitrary SQL with bind parameters (read-only optional) |
//!
//! Every invocation is stateless and independent; the server holds only the
//! immutable registry, the connector handle, and the startup configuration.

pub mod error;
pub mod executor;
pub mod http_transport;
pub mod policy;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::{McpError, ToolError};
pub use executor::ToolExecutor;
pub use protocol::{CallToolParams, JsonRpcRequest, JsonRpcResponse, ToolDefinition};
pub use server::McpServer;
pub use tools::ToolRegistry;
