//! Route definitions for the weather pass-through endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::weather;
use crate::state::AppState;

/// Routes mounted at `/weather`.
///
/// ```text
/// GET /temperature  -> get_temperature
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/temperature", get(weather::get_temperature))
}
