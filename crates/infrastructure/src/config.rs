//! Application configuration
//!
//! Layered loading: built-in defaults, then an optional `config.toml`,
//! then `TIANQI_`-prefixed environment variables. The legacy
//! `ERNIE_ACCESS_TOKEN` and `WEATHER_API_KEY` variables are honored when
//! the corresponding credential is still empty.

use std::collections::HashMap;

use ai_core::InferenceConfig;
use domain::CityDirectory;
use integration_weather::WeatherConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Inference configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Extra city name mappings merged over the built-in directory
    #[serde(default)]
    pub cities: HashMap<String, String>,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("inference.model", "ernie-lite")?
            .set_default("weather.base_url", "http://api.weatherapi.com/v1")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., TIANQI_INFERENCE_MODEL)
            .add_source(
                config::Environment::with_prefix("TIANQI")
                    .separator("_")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_legacy_env(
            std::env::var("ERNIE_ACCESS_TOKEN").ok(),
            std::env::var("WEATHER_API_KEY").ok(),
        );
        Ok(config)
    }

    /// Fill empty credentials from the legacy environment variables
    ///
    /// Only populates credentials that are currently empty. Existing config
    /// values are never overridden, so `config.toml` and `TIANQI_` variables
    /// take precedence.
    fn apply_legacy_env(&mut self, access_token: Option<String>, api_key: Option<String>) {
        if !self.inference.has_access_token() {
            if let Some(token) = access_token.filter(|t| !t.is_empty()) {
                self.inference.access_token = SecretString::from(token);
                debug!("Loaded inference.access_token from ERNIE_ACCESS_TOKEN");
            }
        }
        if !self.weather.has_api_key() {
            if let Some(key) = api_key.filter(|k| !k.is_empty()) {
                self.weather.api_key = SecretString::from(key);
                debug!("Loaded weather.api_key from WEATHER_API_KEY");
            }
        }
    }

    /// Build the city directory with configured extra entries applied
    #[must_use]
    pub fn city_directory(&self) -> CityDirectory {
        let mut cities = CityDirectory::default();
        cities.extend(self.cities.clone());
        cities
    }
}
