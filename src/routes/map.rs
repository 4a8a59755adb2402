// src/routes/map.rs

use axum::extract::State;
use axum::Json;

use super::{internal_error, RouteError};
use crate::models::{AccessibilityRow, Series};
use crate::{queries, AppState};

/// Facility coverage per city for the accessibility map.
pub async fn get_accessibility(
    State(state): State<AppState>,
) -> Result<Json<Series<AccessibilityRow>>, RouteError> {
    let data = queries::fetch_service_accessibility(&state.config)
        .await
        .map_err(|e| internal_error("failed to fetch map data", e))?;
    Ok(Json(Series { data }))
}
