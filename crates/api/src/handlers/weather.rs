//! Handler for the ambient temperature pass-through endpoint.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the temperature endpoint.
#[derive(Debug, Deserialize)]
pub struct TemperatureQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Response payload: ambient temperature in celsius.
#[derive(Debug, Serialize)]
pub struct TemperatureResponse {
    pub temperature: f64,
}

/// GET /weather/temperature
///
/// Pass-through lookup of the current ambient temperature at the given
/// coordinates.
pub async fn get_temperature(
    State(state): State<AppState>,
    Query(query): Query<TemperatureQuery>,
) -> AppResult<Json<DataResponse<TemperatureResponse>>> {
    if !(-90.0..=90.0).contains(&query.lat) || !(-180.0..=180.0).contains(&query.lon) {
        return Err(AppError::BadRequest(
            "lat must be in [-90, 90] and lon in [-180, 180]".to_string(),
        ));
    }

    let temperature = state
        .weather
        .current_temperature(query.lat, query.lon)
        .await?;

    Ok(Json(DataResponse {
        data: TemperatureResponse { temperature },
    }))
}
