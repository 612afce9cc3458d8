//! Forecast port
//!
//! Defines the interface for weather forecast retrieval.

use async_trait::async_trait;
use domain::DayForecast;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather forecast operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch a forecast covering `days` days for a provider-resolved location
    ///
    /// The returned vector holds one entry per day, in date order. Providers
    /// may return fewer days than requested; callers must check the length.
    async fn fetch_forecast(
        &self,
        location: &str,
        days: u8,
    ) -> Result<Vec<DayForecast>, ApplicationError>;

    /// Check if the weather provider is reachable
    async fn is_available(&self) -> bool;
}
