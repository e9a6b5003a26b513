/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development except the
/// weather API key, which has no meaningful default and must be provided
/// for temperature lookups to succeed upstream.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upstream weather API settings.
    pub weather: WeatherConfig,
}

/// Upstream weather API configuration.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Base URL of the upstream API (default: `https://api.openweathermap.org`).
    pub base_url: String,
    /// API key sent as the `appid` query parameter.
    pub api_key: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `3001`                           |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `WEATHER_API_BASE_URL` | `https://api.openweathermap.org` |
    /// | `WEATHER_API_KEY`      | (empty)                          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let weather = WeatherConfig {
            base_url: std::env::var("WEATHER_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.openweathermap.org".into()),
            api_key: std::env::var("WEATHER_API_KEY").unwrap_or_default(),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            weather,
        }
    }
}
