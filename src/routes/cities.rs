// src/routes/cities.rs

use axum::extract::State;
use axum::Json;

use super::{internal_error, RouteError};
use crate::models::CityRef;
use crate::{queries, AppState};

/// City dropdown: bare list of `{code, name}`, sorted by name.
pub async fn list_cities(State(state): State<AppState>) -> Result<Json<Vec<CityRef>>, RouteError> {
    let cities = queries::fetch_cities(&state.config)
        .await
        .map_err(|e| internal_error("failed to fetch city list", e))?;
    Ok(Json(cities))
}
