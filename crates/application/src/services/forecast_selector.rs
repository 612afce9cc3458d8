//! Forecast selection - Second pipeline stage
//!
//! Resolves the intent's location through the city directory, fetches the
//! 3-day forecast, and picks the entry at the intent's day offset.

use std::{fmt, sync::Arc};

use domain::{CityDirectory, DayForecast, QueryIntent, RelativeDay};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::ForecastPort};

/// Service fetching the 3-day forecast and selecting the asked-about day
pub struct ForecastSelector {
    provider: Arc<dyn ForecastPort>,
    cities: CityDirectory,
}

impl fmt::Debug for ForecastSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastSelector")
            .field("cities", &self.cities.len())
            .finish_non_exhaustive()
    }
}

impl ForecastSelector {
    /// Create a selector with the built-in city directory
    pub fn new(provider: Arc<dyn ForecastPort>) -> Self {
        Self::with_cities(provider, CityDirectory::default())
    }

    /// Create a selector with a custom city directory
    pub fn with_cities(provider: Arc<dyn ForecastPort>, cities: CityDirectory) -> Self {
        Self { provider, cities }
    }

    /// Fetch the forecast for the intent's location and select its day
    ///
    /// Provider failures and forecasts shorter than the requested day offset
    /// come back as error values. No retry.
    #[instrument(skip(self, intent), fields(location = %intent.location, day = %intent.day))]
    pub async fn select(&self, intent: &QueryIntent) -> Result<DayForecast, ApplicationError> {
        let resolved = self.cities.resolve(&intent.location);
        let days = self
            .provider
            .fetch_forecast(resolved, RelativeDay::FORECAST_DAYS)
            .await?;

        let available = days.len();
        let index = intent.day.forecast_index();
        debug!(resolved_location = %resolved, available, "Forecast received");

        days.into_iter().nth(index).ok_or_else(|| {
            ApplicationError::Weather(format!(
                "forecast for {resolved} returned {available} day(s), day index {index} unavailable"
            ))
        })
    }
}
