//! Weather data models
//!
//! Types for representing forecast data from the weatherapi.com API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single day of forecast data
///
/// Every metric is optional: the provider omits fields for locations with
/// sparse coverage, and a missing metric must not fail the whole forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Forecast date
    pub date: NaiveDate,
    /// Average temperature in Celsius
    pub avg_temp_c: Option<f64>,
    /// Weather condition text (provider language)
    pub condition: Option<String>,
    /// Chance of rain as a percentage (0-100)
    pub rain_chance_pct: Option<f64>,
    /// Maximum wind speed in km/h
    pub max_wind_kph: Option<f64>,
}

impl ForecastDay {
    /// Get a formatted one-line summary of the forecast day
    #[must_use]
    pub fn summary(&self) -> String {
        let condition = self.condition.as_deref().unwrap_or("unknown");
        match (self.avg_temp_c, self.rain_chance_pct, self.max_wind_kph) {
            (Some(temp), Some(rain), Some(wind)) => format!(
                "{}: {condition} {temp:.1}°C, rain {rain:.0}%, wind {wind:.1} km/h",
                self.date
            ),
            _ => format!("{}: {condition}", self.date),
        }
    }
}

/// Location metadata echoed back by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Location name as resolved by the provider
    pub name: String,
    /// Region or state
    #[serde(default)]
    pub region: String,
    /// Country
    #[serde(default)]
    pub country: String,
}

/// Complete forecast for a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    /// Provider-resolved location, when present in the response
    pub location: Option<Location>,
    /// Daily forecasts, one entry per requested day
    pub days: Vec<ForecastDay>,
}

/// Raw API response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub location: Option<ApiLocation>,
    #[serde(default)]
    pub forecast: Option<ApiForecast>,
}

/// Raw location block
#[derive(Debug, Clone, Deserialize)]
pub struct ApiLocation {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
}

/// Raw forecast block
#[derive(Debug, Clone, Deserialize)]
pub struct ApiForecast {
    #[serde(default)]
    pub forecastday: Vec<ApiForecastDay>,
}

/// Raw per-day forecast entry
#[derive(Debug, Clone, Deserialize)]
pub struct ApiForecastDay {
    pub date: NaiveDate,
    pub day: ApiDay,
}

/// Raw day metrics
#[derive(Debug, Clone, Deserialize)]
pub struct ApiDay {
    #[serde(default)]
    pub avgtemp_c: Option<f64>,
    #[serde(default)]
    pub condition: Option<ApiCondition>,
    #[serde(default)]
    pub daily_chance_of_rain: Option<f64>,
    #[serde(default)]
    pub maxwind_kph: Option<f64>,
}

/// Raw condition block
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCondition {
    #[serde(default)]
    pub text: Option<String>,
}

/// Error envelope returned by the provider on failed requests
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

/// Provider error code and message
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub message: String,
}
