//! Domain entities - Objects with identity and lifecycle

mod day_forecast;
mod query_intent;
mod weather_summary;

pub use day_forecast::DayForecast;
pub use query_intent::QueryIntent;
pub use weather_summary::WeatherSummary;
