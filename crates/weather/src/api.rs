//! REST client for the OpenWeatherMap current-weather endpoint.
//!
//! Wraps the upstream HTTP API using [`reqwest`]. The full payload carries
//! far more than this service needs; only the `main.temp` field is
//! deserialized.

use serde::Deserialize;

/// HTTP client for the upstream weather API.
pub struct WeatherApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Subset of the upstream current-weather payload.
#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainReadings,
}

/// The `main` block of the current-weather payload.
#[derive(Debug, Deserialize)]
struct MainReadings {
    /// Ambient temperature in the requested units (metric: celsius).
    temp: f64,
}

/// Errors from the weather API layer.
#[derive(Debug, thiserror::Error)]
pub enum WeatherApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("Weather API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl WeatherApi {
    /// Create a new client.
    ///
    /// * `base_url` - Upstream base URL, e.g. `https://api.openweathermap.org`.
    /// * `api_key`  - Upstream API key, sent as the `appid` query parameter.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Fetch the current ambient temperature (celsius) at a coordinate pair.
    ///
    /// Sends `GET /data/2.5/weather` with metric units and returns the
    /// `main.temp` field of the response.
    pub async fn current_temperature(&self, lat: f64, lon: f64) -> Result<f64, WeatherApiError> {
        let response = self
            .client
            .get(format!("{}/data/2.5/weather", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let payload: CurrentWeatherResponse = Self::parse_response(response).await?;
        tracing::debug!(lat, lon, temp = payload.main.temp, "Fetched current temperature");
        Ok(payload.main.temp)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`WeatherApiError::ApiError`] containing
    /// the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, WeatherApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(WeatherApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, WeatherApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
