// src/db/mod.rs

use std::path::Path;

use anyhow::Result;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, SqliteConnection};

/// Open a new connection to the dashboard database.
///
/// Every caller gets its own connection and drops it at scope exit; the
/// service runs without a pool.
pub async fn connect(path: &Path) -> Result<SqliteConnection> {
    let conn = SqliteConnectOptions::new().filename(path).connect().await?;
    Ok(conn)
}

/// Open the database for a load run, creating the file if missing.
pub async fn connect_for_load(path: &Path) -> Result<SqliteConnection> {
    let conn = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .connect()
        .await?;
    Ok(conn)
}
