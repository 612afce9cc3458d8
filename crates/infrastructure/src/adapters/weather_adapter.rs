//! Weather adapter - Implements ForecastPort using integration_weather

use application::error::ApplicationError;
use application::ports::ForecastPort;
use async_trait::async_trait;
use domain::DayForecast;
use integration_weather::{
    ForecastClient, ForecastDay, WeatherApiClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for the weatherapi.com forecast service
pub struct WeatherAdapter {
    client: WeatherApiClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"WeatherApiClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            WeatherApiClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ParseError(e) => {
                ApplicationError::Internal(format!("weather response parse error: {e}"))
            },
            WeatherError::ConnectionFailed(e) | WeatherError::RequestFailed(e) => {
                ApplicationError::Weather(e)
            },
            other => ApplicationError::Weather(other.to_string()),
        }
    }

    /// Convert an integration forecast day to the domain representation
    fn map_day(day: &ForecastDay) -> DayForecast {
        DayForecast {
            avg_temp_c: day.avg_temp_c,
            condition: day.condition.clone(),
            rain_chance_pct: day.rain_chance_pct,
            max_wind_kph: day.max_wind_kph,
        }
    }
}

#[async_trait]
impl ForecastPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn fetch_forecast(
        &self,
        location: &str,
        days: u8,
    ) -> Result<Vec<DayForecast>, ApplicationError> {
        let result = self
            .client
            .get_forecast(location, days)
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(forecast) => {
                debug!(
                    resolved = forecast.location.as_ref().map(|l| l.name.as_str()),
                    days = forecast.days.len(),
                    "Retrieved forecast"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get forecast");
            },
        }

        result.map(|f| f.days.iter().map(Self::map_day).collect())
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
