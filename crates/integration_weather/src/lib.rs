//! WeatherAPI forecast integration
//!
//! Client for the weatherapi.com forecast API (<https://www.weatherapi.com>).
//! Provides daily forecasts for a named location, authenticated by API key.

pub mod client;
mod models;

pub use client::{ForecastClient, WeatherApiClient, WeatherConfig, WeatherError};
pub use models::{Forecast, ForecastDay, Location};
