//! Route definitions for the status readings endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::readings;
use crate::state::AppState;

/// Routes mounted at `/readings`.
///
/// ```text
/// POST /            -> ingest_readings
/// GET  /summary     -> get_summary
/// GET  /filter      -> filter_readings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(readings::ingest_readings))
        .route("/summary", get(readings::get_summary))
        .route("/filter", get(readings::filter_readings))
}
