//! Weather summary for prompt embedding
//!
//! Renders a [`DayForecast`] into the four fixed localized metrics the
//! synthesis prompt expects. Field order is the serialization order, so the
//! JSON fed to the language model always lists 温度, 天气, 降雨概率, 最大风速.

use serde::{Deserialize, Serialize};

use super::DayForecast;

/// Display form of a single day's weather, keyed by localized labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Average temperature, e.g. "25°C"
    #[serde(rename = "温度")]
    pub temperature: String,
    /// Condition text, e.g. "晴"
    #[serde(rename = "天气")]
    pub condition: String,
    /// Rain probability, e.g. "30%"
    #[serde(rename = "降雨概率")]
    pub rain_chance: String,
    /// Maximum wind speed, e.g. "10km/h"
    #[serde(rename = "最大风速")]
    pub max_wind: String,
}

impl WeatherSummary {
    /// Sentinel substituted for any metric the provider did not report
    pub const UNKNOWN: &'static str = "未知";

    /// Build the display summary from a forecast, substituting the unknown
    /// sentinel for absent fields
    #[must_use]
    pub fn from_forecast(day: &DayForecast) -> Self {
        Self {
            temperature: format_metric(day.avg_temp_c, "°C"),
            condition: day
                .condition
                .clone()
                .unwrap_or_else(|| Self::UNKNOWN.to_string()),
            rain_chance: format_metric(day.rain_chance_pct, "%"),
            max_wind: format_metric(day.max_wind_kph, "km/h"),
        }
    }
}

impl From<&DayForecast> for WeatherSummary {
    fn from(day: &DayForecast) -> Self {
        Self::from_forecast(day)
    }
}

/// Format a numeric metric with its unit, or the sentinel with the unit
/// when the value is absent
fn format_metric(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(
        || format!("{}{unit}", WeatherSummary::UNKNOWN),
        |v| format!("{v}{unit}"),
    )
}
