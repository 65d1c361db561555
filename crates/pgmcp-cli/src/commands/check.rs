//! The `pgmcp check` command: verify connectivity before serving.

use anyhow::{Context, Result};
use pgmcp_core::DbConfig;
use pgmcp_db::Db;

pub async fn execute() -> Result<()> {
    let config = DbConfig::from_env()?;

    println!("Testing connection to PostgreSQL at {} ...", config.host);
    if let Some(secret_id) = &config.secret_id {
        println!("Credentials provisioned under secret: {secret_id}");
    }

    let db = Db::connect(&config)
        .await
        .context("connection failed")?;

    println!("✅ Connected successfully");
    println!("Server version: {}", db.version().await?);
    println!("Database: {}", db.current_database().await?);

    Ok(())
}
