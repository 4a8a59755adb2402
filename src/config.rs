// src/config.rs

use std::env;
use std::path::PathBuf;

/// Runtime configuration, read from the environment with local-dev defaults.
/// `dotenvy` is applied in each binary's `main` before this is built.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// SQLite database file written by the loader and read by the server.
    pub database_path: PathBuf,
    /// Directory of `.sql` query templates, re-read on every request.
    pub sql_dir: PathBuf,
    /// Directory holding the seven source CSV files.
    pub data_dir: PathBuf,
    /// Dashboard page assets.
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_path: path_var("DATABASE_PATH", "data/dashboard.db"),
            sql_dir: path_var("SQL_DIR", "sql"),
            data_dir: path_var("DATA_DIR", "data_csv"),
            static_dir: path_var("STATIC_DIR", "static"),
        }
    }
}

fn path_var(key: &str, default: &str) -> PathBuf {
    env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
