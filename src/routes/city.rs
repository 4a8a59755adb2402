// src/routes/city.rs

use axum::extract::{Path, State};
use axum::Json;

use super::{internal_error, RouteError};
use crate::models::{CityDetails, CitySeries, GenderSmrPoint, WelfarePoint};
use crate::{queries, AppState};

/// Detail panel. An unknown code yields JSON `null`, not an error.
pub async fn get_details(
    State(state): State<AppState>,
    Path(city_code): Path<String>,
) -> Result<Json<Option<CityDetails>>, RouteError> {
    let details = queries::fetch_city_details(&state.config, &city_code)
        .await
        .map_err(|e| internal_error("failed to fetch city details", e))?;
    Ok(Json(details))
}

pub async fn get_gender_trend(
    State(state): State<AppState>,
    Path(city_code): Path<String>,
) -> Result<Json<CitySeries<GenderSmrPoint>>, RouteError> {
    let data = queries::fetch_gender_smr(&state.config, &city_code)
        .await
        .map_err(|e| internal_error("failed to fetch gender chart data", e))?;
    Ok(Json(CitySeries { city: city_code, data }))
}

pub async fn get_welfare_trend(
    State(state): State<AppState>,
    Path(city_code): Path<String>,
) -> Result<Json<CitySeries<WelfarePoint>>, RouteError> {
    let data = queries::fetch_welfare_spending(&state.config, &city_code)
        .await
        .map_err(|e| internal_error("failed to fetch welfare chart data", e))?;
    Ok(Json(CitySeries { city: city_code, data }))
}
