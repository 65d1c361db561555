//! The `pgmcp init-db` command: one-shot schema bootstrap.

use anyhow::{Context, Result};
use pgmcp_core::DbConfig;
use pgmcp_db::Db;

pub async fn execute() -> Result<()> {
    let config = DbConfig::from_env()?;

    println!("Initializing database {} ...", config.database);

    let db = Db::connect(&config)
        .await
        .context("failed to connect to database")?;

    pgmcp_db::bootstrap(&db)
        .await
        .context("failed to apply schema script")?;

    let tables = db.list_tables().await?;
    println!("✅ {} tables present:", tables.len());
    for table in tables {
        println!("  - {table}");
    }

    Ok(())
}
