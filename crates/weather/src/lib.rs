//! Upstream weather API client library.
//!
//! Wraps the external current-weather HTTP API so the rest of the service
//! never touches its wire format. Only the ambient temperature is surfaced.

pub mod api;

pub use api::{WeatherApi, WeatherApiError};
