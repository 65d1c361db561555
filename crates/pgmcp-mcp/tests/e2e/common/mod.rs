//! Shared test infrastructure for pgmcp end-to-end tests.
//!
//! Provides Docker container management for PostgreSQL and helpers for
//! driving the server through its JSON-RPC surface.

use pgmcp_core::{DbConfig, ServerConfig};
use pgmcp_db::Db;
use pgmcp_mcp::protocol::{JsonRpcRequest, JsonRpcResponse};
use pgmcp_mcp::server::McpServer;
use serde_json::{Value, json};
use std::process::Command;
use std::time::Duration;

pub const CONTAINER_NAME: &str = "pgmcp_test_postgres";
pub const POSTGRES_PORT: u16 = 5434;
pub const POSTGRES_PASSWORD: &str = "pgmcp_test_password";
pub const DATABASE_NAME: &str = "pgmcp_test";

pub fn db_config() -> DbConfig {
    DbConfig {
        host: "localhost".to_string(),
        port: POSTGRES_PORT,
        user: "postgres".to_string(),
        password: POSTGRES_PASSWORD.to_string(),
        database: DATABASE_NAME.to_string(),
        secret_id: None,
    }
}

/// Start a PostgreSQL container for testing.
pub fn start_postgres_container() -> Result<(), String> {
    let output = Command::new("docker")
        .args(["ps", "-a", "-q", "-f", &format!("name={CONTAINER_NAME}")])
        .output()
        .map_err(|e| format!("Failed to check existing container: {e}"))?;

    if !String::from_utf8_lossy(&output.stdout).trim().is_empty() {
        let _ = Command::new("docker")
            .args(["rm", "-f", CONTAINER_NAME])
            .output();
    }

    let status = Command::new("docker")
        .args([
            "run",
            "-d",
            "--name",
            CONTAINER_NAME,
            "-e",
            &format!("POSTGRES_PASSWORD={POSTGRES_PASSWORD}"),
            "-e",
            &format!("POSTGRES_DB={DATABASE_NAME}"),
            "-p",
            &format!("{POSTGRES_PORT}:5432"),
            "postgres:16-alpine",
        ])
        .status()
        .map_err(|e| format!("Failed to start container: {e}"))?;

    if !status.success() {
        return Err("Failed to start PostgreSQL container".to_string());
    }

    Ok(())
}

/// Stop and remove the PostgreSQL container.
pub fn stop_postgres_container() {
    let _ = Command::new("docker")
        .args(["rm", "-f", CONTAINER_NAME])
        .output();
}

/// Wait for PostgreSQL to accept connections.
pub async fn wait_for_postgres() -> Result<Db, String> {
    let config = db_config();
    for attempt in 1..=30 {
        if let Ok(db) = Db::connect(&config).await {
            if db.version().await.is_ok() {
                println!("PostgreSQL ready after {attempt} attempts");
                return Ok(db);
            }
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }
    Err("PostgreSQL did not become ready in time".to_string())
}

pub struct TestContext {
    pub db: Db,
}

impl TestContext {
    pub async fn setup() -> Result<Self, String> {
        start_postgres_container()?;
        let db = wait_for_postgres().await?;
        pgmcp_db::bootstrap(&db)
            .await
            .map_err(|e| format!("Failed to bootstrap database: {e}"))?;
        Ok(Self { db })
    }

    pub fn teardown(&self) {
        stop_postgres_container();
    }

    /// A server over the shared database with the given configuration.
    pub fn server(&self, config: ServerConfig) -> McpServer {
        McpServer::new(self.db.clone(), config)
    }
}

/// Build a `tools/call` request.
pub fn call_tool(name: &str, arguments: Value) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(json!(1)),
        method: "tools/call".to_string(),
        params: Some(json!({ "name": name, "arguments": arguments })),
    }
}

/// Extract the tool result JSON from a successful response.
pub fn extract_json(response: &JsonRpcResponse) -> Value {
    let result = response
        .result
        .as_ref()
        .unwrap_or_else(|| panic!("expected success, got error: {:?}", response.error));
    result["content"][0]["json"].clone()
}

/// Assert that a response failed with the given taxonomy kind.
pub fn assert_error_kind(response: &JsonRpcResponse, kind: &str) {
    let error = response
        .error
        .as_ref()
        .unwrap_or_else(|| panic!("expected {kind} error, got: {:?}", response.result));
    assert_eq!(
        error.data.as_ref().and_then(|d| d["kind"].as_str()),
        Some(kind),
        "unexpected error: {error:?}"
    );
}
