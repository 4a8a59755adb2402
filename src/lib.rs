// src/lib.rs

pub mod config;
pub mod db;
pub mod loader;
pub mod models;
pub mod queries;
pub mod routes;
pub mod templates;

use config::AppConfig;

/// Shared handler state: configuration only. Connections are opened per
/// request and there are no in-process caches.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}
