// src/loader/mod.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::{Connection, SqliteConnection};
use tracing::info;

use crate::config::AppConfig;
use crate::db;

mod records;

pub use records::{
    CityInfoRecord, CitySuicideRecord, HappinessRecord, NationSuicideRecord, RemoteFacilityRecord,
    ServiceFacilityRecord, WelfareSpendingRecord,
};

pub type InsertQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// One CSV-backed table: source file, replacement DDL, and row binding.
///
/// The record struct is the column projection; header-name deserialization
/// ignores any extra CSV columns.
pub trait Dataset: DeserializeOwned {
    const TABLE: &'static str;
    const SOURCE_FILE: &'static str;
    const CREATE: &'static str;
    const INSERT: &'static str;

    fn bind<'q>(&self, query: InsertQuery<'q>) -> InsertQuery<'q>;
}

/// Replace `D::TABLE` with the rows of its source CSV.
///
/// Drop, create, and insert run in a single transaction per table.
pub async fn load_table<D: Dataset>(conn: &mut SqliteConnection, data_dir: &Path) -> Result<u64> {
    let path = data_dir.join(D::SOURCE_FILE);
    let mut reader =
        csv::Reader::from_path(&path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut rows: Vec<D> = Vec::new();
    for record in reader.deserialize() {
        let row: D =
            record.with_context(|| format!("malformed record in {}", path.display()))?;
        rows.push(row);
    }

    let mut tx = conn.begin().await?;
    sqlx::query(&format!("DROP TABLE IF EXISTS {}", D::TABLE))
        .execute(&mut *tx)
        .await?;
    sqlx::query(D::CREATE).execute(&mut *tx).await?;
    for row in &rows {
        row.bind(sqlx::query(D::INSERT)).execute(&mut *tx).await?;
    }
    tx.commit()
        .await
        .with_context(|| format!("failed to replace table {}", D::TABLE))?;

    info!(table = D::TABLE, rows = rows.len(), "table replaced");
    Ok(rows.len() as u64)
}

/// Run the full load: all seven datasets, fail-fast.
///
/// Each table commits on its own; a failure aborts the run and leaves the
/// tables already replaced in place.
pub async fn load_all(config: &AppConfig) -> Result<u64> {
    if let Some(parent) = config.database_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let mut conn = db::connect_for_load(&config.database_path).await?;
    let data_dir = &config.data_dir;

    let mut total = 0;
    total += load_table::<CityInfoRecord>(&mut conn, data_dir).await?;
    total += load_table::<HappinessRecord>(&mut conn, data_dir).await?;
    total += load_table::<CitySuicideRecord>(&mut conn, data_dir).await?;
    total += load_table::<NationSuicideRecord>(&mut conn, data_dir).await?;
    total += load_table::<ServiceFacilityRecord>(&mut conn, data_dir).await?;
    total += load_table::<RemoteFacilityRecord>(&mut conn, data_dir).await?;
    total += load_table::<WelfareSpendingRecord>(&mut conn, data_dir).await?;

    Ok(total)
}
