//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains adapters for ERNIE inference, the weatherapi.com forecast
//! service, and configuration loading.

pub mod adapters;
pub mod config;

pub use adapters::*;
pub use config::AppConfig;
