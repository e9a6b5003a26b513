pub mod health;
pub mod readings;
pub mod weather;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /readings                POST  batch ingest
/// /readings/summary        GET   run-length summary table
/// /readings/filter         GET   time-range + frequency filter
/// /weather/temperature     GET   ambient temperature pass-through
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/readings", readings::router())
        .nest("/weather", weather::router())
}
