//! WeatherAPI forecast client
//!
//! HTTP client for the weatherapi.com forecast API.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ApiError, ApiErrorDetail, ApiForecast, ApiResponse, Forecast, ForecastDay, Location};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The provider does not know the requested location
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// The API key was rejected
    #[error("API key rejected: {0}")]
    InvalidApiKey(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit or call quota exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// weatherapi.com base URL (default: <http://api.weatherapi.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(skip_serializing, default = "default_api_key")]
    pub api_key: SecretString,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "http://api.weatherapi.com/v1".to_string()
}

fn default_api_key() -> SecretString {
    SecretString::from(String::new())
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            timeout_secs: default_timeout(),
        }
    }
}

impl WeatherConfig {
    /// Whether an API key has been provided
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }
}

/// Forecast client trait for fetching weather data
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Get a daily forecast for a named location
    async fn get_forecast(&self, location: &str, days: u8) -> Result<Forecast, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// weatherapi.com HTTP client implementation
#[derive(Debug)]
pub struct WeatherApiClient {
    client: Client,
    config: WeatherConfig,
}

impl WeatherApiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the forecast endpoint URL
    fn forecast_url(&self) -> String {
        format!(
            "{}/forecast.json",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Map raw forecast days to the public model
    fn parse_forecast_days(raw: ApiForecast) -> Vec<ForecastDay> {
        raw.forecastday
            .into_iter()
            .map(|entry| ForecastDay {
                date: entry.date,
                avg_temp_c: entry.day.avgtemp_c,
                condition: entry.day.condition.and_then(|c| c.text),
                rain_chance_pct: entry.day.daily_chance_of_rain,
                max_wind_kph: entry.day.maxwind_kph,
            })
            .collect()
    }

    /// Pull the provider error detail out of a failed response body
    async fn api_error(response: reqwest::Response) -> ApiErrorDetail {
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ApiError>(&body) {
            Ok(envelope) => envelope.error,
            Err(_) => ApiErrorDetail {
                code: 0,
                message: body,
            },
        }
    }
}

#[async_trait]
impl ForecastClient for WeatherApiClient {
    #[instrument(skip(self), fields(location = %location, days = %days))]
    async fn get_forecast(&self, location: &str, days: u8) -> Result<Forecast, WeatherError> {
        let days = days.clamp(1, 14);
        let days_param = days.to_string();
        let url = self.forecast_url();

        debug!(url = %url, "Fetching weather forecast");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.config.api_key.expose_secret()),
                ("q", location),
                ("days", days_param.as_str()),
                ("aqi", "no"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            let error = Self::api_error(response).await;
            warn!(
                status = %status,
                code = error.code,
                message = %error.message,
                "Forecast request rejected"
            );
            // Provider codes: 1006 unknown location, 1002/2006/2008 key
            // problems, 2007 quota exhausted
            return Err(match error.code {
                1006 => WeatherError::LocationNotFound(location.to_string()),
                1002 | 2006 | 2008 => WeatherError::InvalidApiKey(error.message),
                2007 => WeatherError::RateLimitExceeded,
                _ => WeatherError::RequestFailed(format!("HTTP {status}: {}", error.message)),
            });
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let forecast_data = api_response
            .forecast
            .ok_or_else(|| WeatherError::ParseError("No forecast data in response".to_string()))?;

        let day_entries = Self::parse_forecast_days(forecast_data);
        let resolved = api_response.location.map(|loc| Location {
            name: loc.name,
            region: loc.region,
            country: loc.country,
        });

        Ok(Forecast {
            location: resolved,
            days: day_entries,
        })
    }

    async fn is_healthy(&self) -> bool {
        // Simple health check using a one-day Shanghai forecast
        self.get_forecast("Shanghai", 1).await.is_ok()
    }
}
