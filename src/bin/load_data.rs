// src/bin/load_data.rs
//
// One-shot ETL: replace the seven dashboard tables from their source CSVs.
// Run before starting the server; re-running is idempotent.

use tracing::info;
use tracing_subscriber::EnvFilter;

use citywell_api::config::AppConfig;
use citywell_api::loader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    let total = loader::load_all(&config).await?;
    info!(
        rows = total,
        db = %config.database_path.display(),
        "data import complete"
    );
    Ok(())
}
