// src/routes/mod.rs

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::services::{ServeDir, ServeFile};
use tracing::error;

use crate::AppState;

pub mod charts;
pub mod cities;
pub mod city;
pub mod health;
pub mod map;

/// Generic 500 body; the underlying cause goes to the log, not the client.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type RouteError = (StatusCode, Json<ErrorBody>);

// Common error mapper: log the cause, answer with a fixed message.
pub fn internal_error<E: std::fmt::Display>(message: &str, err: E) -> RouteError {
    error!("{message}: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

/// One route per chart, plus the dashboard page and its assets.
pub fn router(state: AppState) -> Router {
    let index = ServeFile::new(state.config.static_dir.join("index.html"));
    let assets = ServeDir::new(state.config.static_dir.clone());

    Router::new()
        .route_service("/", index)
        .nest_service("/static", assets)
        .route("/health", get(health::health))
        .route("/cities", get(cities::list_cities))
        .route("/city/:city_code/details", get(city::get_details))
        .route("/city/:city_code/gender", get(city::get_gender_trend))
        .route("/city/:city_code/welfare", get(city::get_welfare_trend))
        .route("/map/accessibility", get(map::get_accessibility))
        .route("/chart/resource", get(charts::get_resource_priority))
        .route("/chart/age", get(charts::get_age_trend))
        .route("/chart/welfare-average", get(charts::get_welfare_average))
        .with_state(state)
}
