//! Single-day forecast record

use serde::{Deserialize, Serialize};

/// The forecast for one day, as consumed by response synthesis
///
/// Every field is optional: weather providers omit metrics, and an absent
/// value must render as the unknown sentinel rather than fail the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    /// Average temperature in Celsius
    pub avg_temp_c: Option<f64>,
    /// Condition description, e.g. "晴" or "Partly cloudy"
    pub condition: Option<String>,
    /// Probability of rain in percent (0-100)
    pub rain_chance_pct: Option<f64>,
    /// Maximum wind speed in km/h
    pub max_wind_kph: Option<f64>,
}

impl DayForecast {
    /// Create a fully populated forecast
    #[must_use]
    pub fn new(
        avg_temp_c: f64,
        condition: impl Into<String>,
        rain_chance_pct: f64,
        max_wind_kph: f64,
    ) -> Self {
        Self {
            avg_temp_c: Some(avg_temp_c),
            condition: Some(condition.into()),
            rain_chance_pct: Some(rain_chance_pct),
            max_wind_kph: Some(max_wind_kph),
        }
    }

    /// Whether any metric is present
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.avg_temp_c.is_some()
            || self.condition.is_some()
            || self.rain_chance_pct.is_some()
            || self.max_wind_kph.is_some()
    }
}
