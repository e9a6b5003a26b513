use std::sync::Arc;

use machinepulse_weather::WeatherApi;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: machinepulse_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Upstream weather API client.
    pub weather: Arc<WeatherApi>,
}
