// src/routes/charts.rs

use axum::extract::State;
use axum::Json;

use super::{internal_error, RouteError};
use crate::models::{AgeTrendRow, ResourcePriorityRow, Series, WelfareAvgRow};
use crate::{queries, AppState};

/// Happiness standing vs average suicide rate, per city.
pub async fn get_resource_priority(
    State(state): State<AppState>,
) -> Result<Json<Series<ResourcePriorityRow>>, RouteError> {
    let data = queries::fetch_resource_priority(&state.config)
        .await
        .map_err(|e| internal_error("failed to fetch resource priority data", e))?;
    Ok(Json(Series { data }))
}

/// Nationwide suicide figures by age group over time.
pub async fn get_age_trend(
    State(state): State<AppState>,
) -> Result<Json<Series<AgeTrendRow>>, RouteError> {
    let data = queries::fetch_age_trend(&state.config)
        .await
        .map_err(|e| internal_error("failed to fetch age trend data", e))?;
    Ok(Json(Series { data }))
}

/// Per-year welfare spending averaged across all cities.
pub async fn get_welfare_average(
    State(state): State<AppState>,
) -> Result<Json<Series<WelfareAvgRow>>, RouteError> {
    let data = queries::fetch_nationwide_welfare_avg(&state.config)
        .await
        .map_err(|e| internal_error("failed to fetch nationwide welfare average", e))?;
    Ok(Json(Series { data }))
}
