//! Application services - Pipeline stage implementations

mod forecast_selector;
mod intent_extractor;
mod response_synthesizer;
mod weather_agent;

pub use forecast_selector::ForecastSelector;
pub use intent_extractor::IntentExtractor;
pub use response_synthesizer::ResponseSynthesizer;
pub use weather_agent::WeatherAgentService;
