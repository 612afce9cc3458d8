//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod ernie_inference_adapter;
mod weather_adapter;

pub use ernie_inference_adapter::ErnieInferenceAdapter;
pub use weather_adapter::WeatherAdapter;
